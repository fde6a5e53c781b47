//! Alluxio cluster metadata on the wire and in the domain.
//!
//! alluxio-wire translates between the Thrift-shaped entities Alluxio masters
//! and workers exchange and validated, immutable domain values.
//!
//! # Crate Structure
//!
//! - [`thrift`]: wire entities, one optional field per Thrift field
//! - [`types`]: domain values with their invariants enforced at construction
//! - [`codec`]: `FromWire`/`ToWire` for every entity, plus document loading
//!   and round-trip checks

/// Re-export wire entities.
pub mod thrift {
    pub use alluxio_thrift::*;
}

/// Re-export domain values.
pub mod types {
    pub use alluxio_types::*;
}

/// Re-export the codec.
pub mod codec {
    pub use alluxio_codec::*;
}
