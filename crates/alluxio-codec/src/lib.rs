//! Field-by-field translation between Alluxio Thrift wire entities and
//! domain values.
//!
//! Every domain entity implements [`FromWire`] and [`ToWire`]. Decoding is
//! fallible and reports the first problem as [`MalformedWireData`], tagged
//! with the entity and field where it was found. Encoding is total over valid
//! domain values.
//!
//! The per-field presence policy (which optional fields rely on the wire's
//! presence indicator alone and which also carry a sentinel) is spelled out
//! in each entity module.
//!
//! ```
//! use alluxio_codec::{FromWire, ToWire};
//! use alluxio_thrift as thrift;
//! use alluxio_types::WorkerNetAddress;
//!
//! let wire = thrift::WorkerNetAddress {
//!     host: Some("node1".to_string()),
//!     rpc_port: Some(29998),
//!     data_port: Some(29999),
//!     ..Default::default()
//! };
//! let address = WorkerNetAddress::from_wire(wire.clone()).unwrap();
//! assert_eq!(address.rpc_port(), 29998);
//! assert_eq!(address.to_wire(), wire);
//! ```

pub mod block;
pub mod config;
pub mod convert;
pub mod document;
pub mod entity;
pub mod error;
pub mod file;
pub mod lineage;
pub mod master;
pub mod mount;
pub mod roundtrip;
pub mod ttl;
pub mod worker;

mod field;

pub use config::DocumentConfig;
pub use convert::{decode, decode_list, encode, encode_list, FromWire, ToWire};
pub use document::DocumentLoader;
pub use entity::{decode_entity, encode_entity, DomainEntity, EntityKind, WireEntity};
pub use error::{DocumentError, DocumentResult, Malformed, MalformedWireData, Result};
pub use roundtrip::{check_round_trip, RoundTripReport};
