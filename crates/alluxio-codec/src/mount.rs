//! Mount point summary.
//!
//! UFS capacity and usage are absent when unset or when the UFS reported
//! [`thrift::MountPointInfo::UNKNOWN_SIZE`]. Properties read an unset map as
//! empty.

use alluxio_thrift as thrift;
use alluxio_types::MountPointInfo;

use crate::convert::{FromWire, ToWire};
use crate::error::Result;
use crate::field;

const MOUNT: &str = "MountPointInfo";

impl FromWire for MountPointInfo {
    type Wire = thrift::MountPointInfo;

    fn from_wire(wire: thrift::MountPointInfo) -> Result<Self> {
        let ufs_uri = field::required(MOUNT, "ufs_uri", wire.ufs_uri)?;
        let info = MountPointInfo::builder(ufs_uri)
            .ufs_type(field::required(MOUNT, "ufs_type", wire.ufs_type)?)
            .ufs_capacity_bytes(field::sentinel_quantity(
                MOUNT,
                "ufs_capacity_bytes",
                wire.ufs_capacity_bytes,
                thrift::MountPointInfo::UNKNOWN_SIZE,
            )?)
            .ufs_used_bytes(field::sentinel_quantity(
                MOUNT,
                "ufs_used_bytes",
                wire.ufs_used_bytes,
                thrift::MountPointInfo::UNKNOWN_SIZE,
            )?)
            .read_only(field::required(MOUNT, "read_only", wire.read_only)?)
            .properties(wire.properties.unwrap_or_default())
            .shared(field::required(MOUNT, "shared", wire.shared)?)
            .build()?;
        Ok(info)
    }
}

impl ToWire for MountPointInfo {
    type Wire = thrift::MountPointInfo;

    fn to_wire(&self) -> thrift::MountPointInfo {
        thrift::MountPointInfo {
            ufs_uri: Some(self.ufs_uri().to_string()),
            ufs_type: Some(self.ufs_type().to_string()),
            ufs_capacity_bytes: self
                .ufs_capacity_bytes()
                .map(|bytes| field::wire_i64(MOUNT, "ufs_capacity_bytes", bytes)),
            ufs_used_bytes: self
                .ufs_used_bytes()
                .map(|bytes| field::wire_i64(MOUNT, "ufs_used_bytes", bytes)),
            read_only: Some(self.is_read_only()),
            properties: Some(self.properties().clone()),
            shared: Some(self.is_shared()),
        }
    }
}
