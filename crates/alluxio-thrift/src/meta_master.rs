//! Entities served by the meta master (`meta_master.thrift`).

use serde::{Deserialize, Serialize};

/// Master summary.
///
/// Callers request a subset of fields, so any of them may be unset in a
/// perfectly valid response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MasterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_master_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_time_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_port: Option<i32>,
}
