//! Entities served by the block master (`block_master.thrift`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::WorkerNetAddress;

/// Cluster-wide storage summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockMasterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_bytes_on_tiers: Option<BTreeMap<String, i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_bytes_on_tiers: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<WorkerNetAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact_sec: Option<i32>,
    /// Free-form on the wire; see [`WorkerInfo::STATE_IN_SERVICE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_bytes_on_tiers: Option<BTreeMap<String, i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_bytes_on_tiers: Option<BTreeMap<String, i64>>,
}

impl WorkerInfo {
    /// State string written for live workers.
    pub const STATE_IN_SERVICE: &'static str = "In Service";
    /// State string written for lost workers.
    pub const STATE_OUT_OF_SERVICE: &'static str = "Out of Service";
}
