//! Thrift-shaped wire entities for Alluxio cluster metadata RPCs.
//!
//! These are the flat structures the RPC transport produces and consumes.
//! Every field is optional: `None` means the field was not set on the wire.
//! Some fields additionally carry schema-defined sentinels inside a present
//! value (for example `-1` for "no TTL"); the constants for those live next
//! to the struct that uses them.
//!
//! Nothing here validates anything. Use `alluxio-codec` to turn these into
//! domain values.

pub mod block_master;
pub mod common;
pub mod file_system_master;
pub mod lineage_master;
pub mod meta_master;

pub use block_master::{BlockMasterInfo, WorkerInfo};
pub use common::{BlockInfo, BlockLocation, TTtlAction, WorkerNetAddress};
pub use file_system_master::{FileBlockInfo, FileInfo, MountPointInfo};
pub use lineage_master::{CommandLineJobInfo, JobConfInfo, LineageInfo};
pub use meta_master::MasterInfo;
