//! Validated, immutable domain value objects for Alluxio cluster metadata.
//!
//! This is the surface application logic works with. Every value here has
//! passed validation at construction time: quantities are unsigned and fit
//! the wire's 64-bit signed range, ports fit `u16`, optional concepts are
//! `Option`s rather than sentinels, and enumerations are proper enums.
//!
//! Values are never mutated after construction. Small entities are built
//! with `new`; larger ones through a builder whose `build` validates.

pub mod block;
pub mod error;
pub mod file;
pub mod lineage;
pub mod master;
pub mod mount;
pub mod ttl;
pub mod worker;

mod ser;
mod validate;

pub use block::{BlockInfo, BlockLocation, BlockMasterInfo, BlockMasterInfoBuilder};
pub use error::{Result, ValidationError};
pub use file::{FileBlockInfo, FileInfo, FileInfoBuilder, PersistenceState};
pub use lineage::{CommandLineJobInfo, JobConfInfo, LineageInfo, LineageInfoBuilder};
pub use master::{MasterInfo, MasterInfoBuilder};
pub use mount::{MountPointInfo, MountPointInfoBuilder};
pub use ttl::TtlAction;
pub use validate::MAX_QUANTITY;
pub use worker::{WorkerInfo, WorkerInfoBuilder, WorkerNetAddress, WorkerState};
