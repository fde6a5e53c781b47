//! Closed sums over every entity the codec understands.
//!
//! Documents tag each value with its kind:
//! `{"entity": "worker_net_address", "value": {"host": "node1", ...}}`.

use std::fmt;
use std::str::FromStr;

use alluxio_thrift as thrift;
use alluxio_types as types;
use serde::{Deserialize, Serialize};

use crate::convert::{FromWire, ToWire};
use crate::error::{DocumentError, Result};

/// Every entity kind, named as it appears in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    BlockInfo,
    BlockLocation,
    BlockMasterInfo,
    CommandLineJobInfo,
    FileBlockInfo,
    FileInfo,
    JobConfInfo,
    LineageInfo,
    MasterInfo,
    MountPointInfo,
    TtlAction,
    WorkerInfo,
    WorkerNetAddress,
}

impl EntityKind {
    pub const ALL: [EntityKind; 13] = [
        EntityKind::BlockInfo,
        EntityKind::BlockLocation,
        EntityKind::BlockMasterInfo,
        EntityKind::CommandLineJobInfo,
        EntityKind::FileBlockInfo,
        EntityKind::FileInfo,
        EntityKind::JobConfInfo,
        EntityKind::LineageInfo,
        EntityKind::MasterInfo,
        EntityKind::MountPointInfo,
        EntityKind::TtlAction,
        EntityKind::WorkerInfo,
        EntityKind::WorkerNetAddress,
    ];

    /// Document tag.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::BlockInfo => "block_info",
            EntityKind::BlockLocation => "block_location",
            EntityKind::BlockMasterInfo => "block_master_info",
            EntityKind::CommandLineJobInfo => "command_line_job_info",
            EntityKind::FileBlockInfo => "file_block_info",
            EntityKind::FileInfo => "file_info",
            EntityKind::JobConfInfo => "job_conf_info",
            EntityKind::LineageInfo => "lineage_info",
            EntityKind::MasterInfo => "master_info",
            EntityKind::MountPointInfo => "mount_point_info",
            EntityKind::TtlAction => "ttl_action",
            EntityKind::WorkerInfo => "worker_info",
            EntityKind::WorkerNetAddress => "worker_net_address",
        }
    }

    /// Name of the Thrift struct or enum.
    pub fn wire_name(self) -> &'static str {
        match self {
            EntityKind::BlockInfo => "BlockInfo",
            EntityKind::BlockLocation => "BlockLocation",
            EntityKind::BlockMasterInfo => "BlockMasterInfo",
            EntityKind::CommandLineJobInfo => "CommandLineJobInfo",
            EntityKind::FileBlockInfo => "FileBlockInfo",
            EntityKind::FileInfo => "FileInfo",
            EntityKind::JobConfInfo => "JobConfInfo",
            EntityKind::LineageInfo => "LineageInfo",
            EntityKind::MasterInfo => "MasterInfo",
            EntityKind::MountPointInfo => "MountPointInfo",
            EntityKind::TtlAction => "TTtlAction",
            EntityKind::WorkerInfo => "WorkerInfo",
            EntityKind::WorkerNetAddress => "WorkerNetAddress",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownEntity(s.to_string()))
    }
}

/// A wire value of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity", content = "value", rename_all = "snake_case")]
pub enum WireEntity {
    BlockInfo(thrift::BlockInfo),
    BlockLocation(thrift::BlockLocation),
    BlockMasterInfo(thrift::BlockMasterInfo),
    CommandLineJobInfo(thrift::CommandLineJobInfo),
    FileBlockInfo(thrift::FileBlockInfo),
    FileInfo(thrift::FileInfo),
    JobConfInfo(thrift::JobConfInfo),
    LineageInfo(thrift::LineageInfo),
    MasterInfo(thrift::MasterInfo),
    MountPointInfo(thrift::MountPointInfo),
    TtlAction(thrift::TTtlAction),
    WorkerInfo(thrift::WorkerInfo),
    WorkerNetAddress(thrift::WorkerNetAddress),
}

impl WireEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            WireEntity::BlockInfo(_) => EntityKind::BlockInfo,
            WireEntity::BlockLocation(_) => EntityKind::BlockLocation,
            WireEntity::BlockMasterInfo(_) => EntityKind::BlockMasterInfo,
            WireEntity::CommandLineJobInfo(_) => EntityKind::CommandLineJobInfo,
            WireEntity::FileBlockInfo(_) => EntityKind::FileBlockInfo,
            WireEntity::FileInfo(_) => EntityKind::FileInfo,
            WireEntity::JobConfInfo(_) => EntityKind::JobConfInfo,
            WireEntity::LineageInfo(_) => EntityKind::LineageInfo,
            WireEntity::MasterInfo(_) => EntityKind::MasterInfo,
            WireEntity::MountPointInfo(_) => EntityKind::MountPointInfo,
            WireEntity::TtlAction(_) => EntityKind::TtlAction,
            WireEntity::WorkerInfo(_) => EntityKind::WorkerInfo,
            WireEntity::WorkerNetAddress(_) => EntityKind::WorkerNetAddress,
        }
    }
}

/// A domain value of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entity", content = "value", rename_all = "snake_case")]
pub enum DomainEntity {
    BlockInfo(types::BlockInfo),
    BlockLocation(types::BlockLocation),
    BlockMasterInfo(types::BlockMasterInfo),
    CommandLineJobInfo(types::CommandLineJobInfo),
    FileBlockInfo(types::FileBlockInfo),
    FileInfo(types::FileInfo),
    JobConfInfo(types::JobConfInfo),
    LineageInfo(types::LineageInfo),
    MasterInfo(types::MasterInfo),
    MountPointInfo(types::MountPointInfo),
    TtlAction(types::TtlAction),
    WorkerInfo(types::WorkerInfo),
    WorkerNetAddress(types::WorkerNetAddress),
}

impl DomainEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            DomainEntity::BlockInfo(_) => EntityKind::BlockInfo,
            DomainEntity::BlockLocation(_) => EntityKind::BlockLocation,
            DomainEntity::BlockMasterInfo(_) => EntityKind::BlockMasterInfo,
            DomainEntity::CommandLineJobInfo(_) => EntityKind::CommandLineJobInfo,
            DomainEntity::FileBlockInfo(_) => EntityKind::FileBlockInfo,
            DomainEntity::FileInfo(_) => EntityKind::FileInfo,
            DomainEntity::JobConfInfo(_) => EntityKind::JobConfInfo,
            DomainEntity::LineageInfo(_) => EntityKind::LineageInfo,
            DomainEntity::MasterInfo(_) => EntityKind::MasterInfo,
            DomainEntity::MountPointInfo(_) => EntityKind::MountPointInfo,
            DomainEntity::TtlAction(_) => EntityKind::TtlAction,
            DomainEntity::WorkerInfo(_) => EntityKind::WorkerInfo,
            DomainEntity::WorkerNetAddress(_) => EntityKind::WorkerNetAddress,
        }
    }
}

/// Decode a wire value of any kind.
pub fn decode_entity(wire: WireEntity) -> Result<DomainEntity> {
    Ok(match wire {
        WireEntity::BlockInfo(w) => DomainEntity::BlockInfo(FromWire::from_wire(w)?),
        WireEntity::BlockLocation(w) => DomainEntity::BlockLocation(FromWire::from_wire(w)?),
        WireEntity::BlockMasterInfo(w) => DomainEntity::BlockMasterInfo(FromWire::from_wire(w)?),
        WireEntity::CommandLineJobInfo(w) => {
            DomainEntity::CommandLineJobInfo(FromWire::from_wire(w)?)
        }
        WireEntity::FileBlockInfo(w) => DomainEntity::FileBlockInfo(FromWire::from_wire(w)?),
        WireEntity::FileInfo(w) => DomainEntity::FileInfo(FromWire::from_wire(w)?),
        WireEntity::JobConfInfo(w) => DomainEntity::JobConfInfo(FromWire::from_wire(w)?),
        WireEntity::LineageInfo(w) => DomainEntity::LineageInfo(FromWire::from_wire(w)?),
        WireEntity::MasterInfo(w) => DomainEntity::MasterInfo(FromWire::from_wire(w)?),
        WireEntity::MountPointInfo(w) => DomainEntity::MountPointInfo(FromWire::from_wire(w)?),
        WireEntity::TtlAction(w) => DomainEntity::TtlAction(FromWire::from_wire(w)?),
        WireEntity::WorkerInfo(w) => DomainEntity::WorkerInfo(FromWire::from_wire(w)?),
        WireEntity::WorkerNetAddress(w) => DomainEntity::WorkerNetAddress(FromWire::from_wire(w)?),
    })
}

/// Encode a domain value of any kind.
pub fn encode_entity(entity: &DomainEntity) -> WireEntity {
    match entity {
        DomainEntity::BlockInfo(v) => WireEntity::BlockInfo(v.to_wire()),
        DomainEntity::BlockLocation(v) => WireEntity::BlockLocation(v.to_wire()),
        DomainEntity::BlockMasterInfo(v) => WireEntity::BlockMasterInfo(v.to_wire()),
        DomainEntity::CommandLineJobInfo(v) => WireEntity::CommandLineJobInfo(v.to_wire()),
        DomainEntity::FileBlockInfo(v) => WireEntity::FileBlockInfo(v.to_wire()),
        DomainEntity::FileInfo(v) => WireEntity::FileInfo(v.to_wire()),
        DomainEntity::JobConfInfo(v) => WireEntity::JobConfInfo(v.to_wire()),
        DomainEntity::LineageInfo(v) => WireEntity::LineageInfo(v.to_wire()),
        DomainEntity::MasterInfo(v) => WireEntity::MasterInfo(v.to_wire()),
        DomainEntity::MountPointInfo(v) => WireEntity::MountPointInfo(v.to_wire()),
        DomainEntity::TtlAction(v) => WireEntity::TtlAction(v.to_wire()),
        DomainEntity::WorkerInfo(v) => WireEntity::WorkerInfo(v.to_wire()),
        DomainEntity::WorkerNetAddress(v) => WireEntity::WorkerNetAddress(v.to_wire()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedWireData;

    #[test]
    fn kind_names_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn kind_serializes_as_its_tag() {
        let json = serde_json::to_value(EntityKind::CommandLineJobInfo).unwrap();
        assert_eq!(json, "command_line_job_info");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "inode".parse::<EntityKind>().unwrap_err();
        assert!(matches!(err, DocumentError::UnknownEntity(name) if name == "inode"));
    }

    #[test]
    fn serde_tag_matches_kind_name() {
        let wire = WireEntity::JobConfInfo(thrift::JobConfInfo {
            output_file: Some("/out/log".to_string()),
        });
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["entity"], EntityKind::JobConfInfo.as_str());
        assert_eq!(json["value"]["outputFile"], "/out/log");

        let parsed: WireEntity = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, wire);
    }

    #[test]
    fn ttl_action_document_carries_the_code() {
        let parsed: WireEntity =
            serde_json::from_str(r#"{"entity":"ttl_action","value":1}"#).unwrap();
        assert_eq!(parsed, WireEntity::TtlAction(thrift::TTtlAction::FREE));
        assert_eq!(
            decode_entity(parsed).unwrap(),
            DomainEntity::TtlAction(types::TtlAction::Free)
        );
    }

    #[test]
    fn decode_and_encode_keep_the_kind() {
        let wire = WireEntity::WorkerNetAddress(thrift::WorkerNetAddress {
            host: Some("node1".to_string()),
            rpc_port: Some(29998),
            data_port: Some(29999),
            ..Default::default()
        });
        let domain = decode_entity(wire.clone()).unwrap();
        assert_eq!(domain.kind(), EntityKind::WorkerNetAddress);
        assert_eq!(encode_entity(&domain), wire);
    }

    #[test]
    fn decode_failure_is_passed_through() {
        let err = decode_entity(WireEntity::TtlAction(thrift::TTtlAction(7))).unwrap_err();
        assert_eq!(err, MalformedWireData::unknown_code("TtlAction", "code", 7));
    }
}
