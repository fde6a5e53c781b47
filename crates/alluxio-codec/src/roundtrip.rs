//! Round-trip checks over a single wire value.
//!
//! A value is decoded, re-encoded and decoded again. The domain value must
//! survive unchanged. The wire value may differ, but only in the ways the
//! codec normalizes: unset collections come back empty, sentinels and empty
//! strings come back unset, and the legacy UFS location list is regenerated.

use alluxio_thrift as thrift;
use serde::Serialize;
use serde_json::Value;

use crate::entity::{decode_entity, encode_entity, EntityKind, WireEntity};
use crate::error::DocumentResult;

/// Numeric fields whose sentinel value is encoded as unset.
const SENTINEL_FIELDS: &[(&str, i64)] = &[
    ("mountId", thrift::FileInfo::INVALID_MOUNT_ID),
    ("ttl", thrift::FileInfo::NO_TTL),
    ("ufsCapacityBytes", thrift::MountPointInfo::UNKNOWN_SIZE),
    ("ufsUsedBytes", thrift::MountPointInfo::UNKNOWN_SIZE),
];

/// String fields whose empty value is encoded as unset.
const EMPTY_STRING_FIELDS: &[&str] = &["domainSocketPath", "ufsPath"];

/// Collection fields whose unset value is encoded as empty.
const COLLECTION_FIELDS: &[&str] = &[
    "blockIds",
    "capacityBytesOnTiers",
    "children",
    "fileBlockInfos",
    "inputFiles",
    "locations",
    "outputFiles",
    "parents",
    "properties",
    "usedBytesOnTiers",
];

/// Rewritten wholesale on encode. Any difference beneath it is normalized.
const REGENERATED: &str = "ufsLocations";

/// Filled from the legacy list when the wire left it unset or empty.
const LEGACY_FILLED: &str = "ufsStringLocations";

static NULL: Value = Value::Null;

/// Outcome of one round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTripReport {
    pub entity: EntityKind,
    /// `decode(encode(decode(w))) == decode(w)`.
    pub domain_stable: bool,
    /// `encode(decode(w)) == w`.
    pub wire_identical: bool,
    /// Wire paths that changed in a way the codec is allowed to change them.
    pub normalized_fields: Vec<String>,
    /// Wire paths that changed any other way.
    pub unexpected_fields: Vec<String>,
}

impl RoundTripReport {
    /// The domain value survived and every wire change is a known one.
    pub fn is_clean(&self) -> bool {
        self.domain_stable && self.unexpected_fields.is_empty()
    }
}

/// Run the round-trip laws against `wire`.
///
/// Fails only when `wire` itself does not decode.
pub fn check_round_trip(wire: WireEntity) -> DocumentResult<RoundTripReport> {
    let kind = wire.kind();
    let domain = decode_entity(wire.clone())?;
    let encoded = encode_entity(&domain);
    let domain_stable = decode_entity(encoded.clone()).is_ok_and(|again| again == domain);
    let wire_identical = encoded == wire;

    let mut normalized_fields = Vec::new();
    let mut unexpected_fields = Vec::new();
    if !wire_identical {
        let before = serde_json::to_value(&wire)?;
        let after = serde_json::to_value(&encoded)?;
        for change in changes(&before["value"], &after["value"]) {
            if is_normalized(&change) {
                normalized_fields.push(render(&change.path));
            } else {
                unexpected_fields.push(render(&change.path));
            }
        }
    }

    Ok(RoundTripReport {
        entity: kind,
        domain_stable,
        wire_identical,
        normalized_fields,
        unexpected_fields,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// One differing leaf, with the wire value on each side.
#[derive(Debug)]
struct Change<'a> {
    path: Vec<Segment>,
    before: &'a Value,
    after: &'a Value,
}

fn changes<'a>(before: &'a Value, after: &'a Value) -> Vec<Change<'a>> {
    let mut changes = Vec::new();
    diff(before, after, &mut Vec::new(), &mut changes);
    changes
}

fn diff<'a>(
    before: &'a Value,
    after: &'a Value,
    path: &mut Vec<Segment>,
    changes: &mut Vec<Change<'a>>,
) {
    match (before, after) {
        (Value::Object(before), Value::Object(after)) => {
            let mut keys: Vec<&String> = before.keys().chain(after.keys()).collect();
            keys.sort();
            keys.dedup();
            for key in keys {
                let left = before.get(key).unwrap_or(&NULL);
                let right = after.get(key).unwrap_or(&NULL);
                path.push(Segment::Key(key.clone()));
                diff(left, right, path, changes);
                path.pop();
            }
        }
        (Value::Array(before), Value::Array(after)) if before.len() == after.len() => {
            for (index, (left, right)) in before.iter().zip(after).enumerate() {
                path.push(Segment::Index(index));
                diff(left, right, path, changes);
                path.pop();
            }
        }
        _ if before == after => {}
        _ => changes.push(Change {
            path: path.clone(),
            before,
            after,
        }),
    }
}

fn is_normalized(change: &Change<'_>) -> bool {
    let regenerated = change
        .path
        .iter()
        .any(|segment| matches!(segment, Segment::Key(key) if key == REGENERATED));
    if regenerated {
        return true;
    }
    let Some(Segment::Key(leaf)) = change.path.last() else {
        return false;
    };
    let (before, after) = (change.before, change.after);
    let leaf = leaf.as_str();
    if let Some((_, sentinel)) = SENTINEL_FIELDS.iter().find(|(name, _)| *name == leaf) {
        before.as_i64() == Some(*sentinel) && after.is_null()
    } else if EMPTY_STRING_FIELDS.contains(&leaf) {
        before.as_str() == Some("") && after.is_null()
    } else if COLLECTION_FIELDS.contains(&leaf) {
        before.is_null() && is_empty_collection(after)
    } else if leaf == LEGACY_FILLED {
        before.is_null() || before.as_array().is_some_and(Vec::is_empty)
    } else {
        false
    }
}

fn is_empty_collection(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        _ => false,
    }
}

fn render(path: &[Segment]) -> String {
    let mut rendered = String::new();
    for segment in path {
        match segment {
            Segment::Key(key) => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(key);
            }
            Segment::Index(index) => rendered.push_str(&format!("[{index}]")),
        }
    }
    rendered
}
