//! Entities shared by every master service (`common.thrift`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Network address of a worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerNetAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_port: Option<i32>,
    /// Empty string means the worker does not serve short-circuit reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_socket_path: Option<String>,
}

/// Where one replica of a block lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_address: Option<WorkerNetAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_alias: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<BlockLocation>>,
}

/// Action taken when a file's TTL expires.
///
/// Kept as a raw code so that values written by a newer peer survive
/// deserialization; mapping to a known action happens in the codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TTtlAction(pub i32);

impl TTtlAction {
    pub const DELETE: TTtlAction = TTtlAction(0);
    pub const FREE: TTtlAction = TTtlAction(1);

    /// Every code defined by this schema version.
    pub const ALL: [TTtlAction; 2] = [Self::DELETE, Self::FREE];

    /// The schema name of the code, if it is one this version knows.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::DELETE => Some("Delete"),
            Self::FREE => Some("Free"),
            _ => None,
        }
    }
}

impl From<i32> for TTtlAction {
    fn from(code: i32) -> Self {
        TTtlAction(code)
    }
}

impl fmt::Display for TTtlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "TTtlAction({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_are_not_serialized() {
        let address = WorkerNetAddress {
            host: Some("node1".to_string()),
            rpc_port: Some(29998),
            ..WorkerNetAddress::default()
        };

        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, r#"{"host":"node1","rpcPort":29998}"#);
    }

    #[test]
    fn missing_fields_deserialize_as_unset() {
        let location: BlockLocation = serde_json::from_str(r#"{"workerId":7}"#).unwrap();
        assert_eq!(location.worker_id, Some(7));
        assert!(location.worker_address.is_none());
        assert!(location.tier_alias.is_none());
    }

    #[test]
    fn ttl_action_keeps_unknown_codes() {
        let action: TTtlAction = serde_json::from_str("99").unwrap();
        assert_eq!(action, TTtlAction(99));
        assert_eq!(action.name(), None);
        assert_eq!(action.to_string(), "TTtlAction(99)");
        assert_eq!(TTtlAction::FREE.to_string(), "Free");
    }
}
