//! Entities served by the file system master (`file_system_master.thrift`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::{BlockInfo, TTtlAction, WorkerNetAddress};

/// A block as seen from the file that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileBlockInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_info: Option<BlockInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Deprecated since 1.1; superseded by `ufs_string_locations`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ufs_locations: Option<Vec<WorkerNetAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ufs_string_locations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Empty string means the file has no UFS counterpart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ufs_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cacheable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_memory_percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modification_time_ms: Option<i64>,
    /// Milliseconds; [`FileInfo::NO_TTL`] when the file never expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_point: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_block_infos: Option<Vec<FileBlockInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_action: Option<TTtlAction>,
    /// [`FileInfo::INVALID_MOUNT_ID`] when the file is not under a mount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_alluxio_percentage: Option<i32>,
}

impl FileInfo {
    pub const NO_TTL: i64 = -1;
    pub const INVALID_MOUNT_ID: i64 = -1;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MountPointInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ufs_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ufs_type: Option<String>,
    /// [`MountPointInfo::UNKNOWN_SIZE`] when the UFS could not report it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ufs_capacity_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ufs_used_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
}

impl MountPointInfo {
    pub const UNKNOWN_SIZE: i64 = -1;
}
