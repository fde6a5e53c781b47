//! File metadata and file blocks.
//!
//! Presence policy for `FileInfo`:
//!
//! | field | absent when |
//! |---|---|
//! | `ufs_path` | unset, or the empty string |
//! | `ttl` | unset, or [`thrift::FileInfo::NO_TTL`] |
//! | `mount_id` | unset, or [`thrift::FileInfo::INVALID_MOUNT_ID`] |
//! | `ttl_action`, `in_alluxio_percentage` | unset |
//!
//! Every other scalar is required. `persistence_state` is a string enum with
//! a closed table.
//!
//! `FileBlockInfo` still understands the pre-1.1 `ufs_locations` list of
//! worker addresses. It is read only when `ufs_string_locations` is empty,
//! and it is always regenerated on encode so old readers keep working.

use std::time::Duration;

use alluxio_thrift as thrift;
use alluxio_types::{BlockInfo, FileBlockInfo, FileInfo, PersistenceState, TtlAction};

use crate::convert::{decode_list, encode_list, FromWire, ToWire};
use crate::error::{MalformedWireData, Result};
use crate::field;

const FILE_BLOCK: &str = "FileBlockInfo";
const FILE: &str = "FileInfo";

const NOT_PERSISTED: &str = "NOT_PERSISTED";
const TO_BE_PERSISTED: &str = "TO_BE_PERSISTED";
const PERSISTED: &str = "PERSISTED";
const LOST: &str = "LOST";

fn persistence_state(name: String) -> Result<PersistenceState> {
    match name.as_str() {
        NOT_PERSISTED => Ok(PersistenceState::NotPersisted),
        TO_BE_PERSISTED => Ok(PersistenceState::ToBePersisted),
        PERSISTED => Ok(PersistenceState::Persisted),
        LOST => Ok(PersistenceState::Lost),
        _ => Err(MalformedWireData::unknown_name(
            FILE,
            "persistence_state",
            name,
        )),
    }
}

fn wire_persistence_state(state: PersistenceState) -> &'static str {
    match state {
        PersistenceState::NotPersisted => NOT_PERSISTED,
        PersistenceState::ToBePersisted => TO_BE_PERSISTED,
        PersistenceState::Persisted => PERSISTED,
        PersistenceState::Lost => LOST,
    }
}

/// Render a legacy address as `host:dataPort`, bracketing IPv6 hosts.
fn legacy_location(address: thrift::WorkerNetAddress) -> Result<String> {
    let host = field::required(FILE_BLOCK, "ufs_locations", address.host)?;
    Ok(match address.data_port {
        Some(port) if port >= 0 && host.contains(':') => format!("[{host}]:{port}"),
        Some(port) if port >= 0 => format!("{host}:{port}"),
        _ => host,
    })
}

/// Split `host[:port]` or `[v6-host][:port]`. A missing or unparsable port
/// becomes `-1`.
fn legacy_address(location: &str) -> thrift::WorkerNetAddress {
    let (host, port) = split_host_port(location);
    thrift::WorkerNetAddress {
        host: Some(host.to_string()),
        data_port: Some(port.map_or(-1, i32::from)),
        ..Default::default()
    }
}

fn split_host_port(location: &str) -> (&str, Option<u16>) {
    if let Some(rest) = location.strip_prefix('[') {
        if let Some((host, tail)) = rest.split_once(']') {
            let port = tail.strip_prefix(':').and_then(|port| port.parse().ok());
            return (host, port);
        }
    }
    match location.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => match port.parse() {
            Ok(port) => (host, Some(port)),
            Err(_) => (location, None),
        },
        _ => (location, None),
    }
}

impl FromWire for FileBlockInfo {
    type Wire = thrift::FileBlockInfo;

    fn from_wire(wire: thrift::FileBlockInfo) -> Result<Self> {
        let block_info =
            BlockInfo::from_wire(field::required(FILE_BLOCK, "block_info", wire.block_info)?)?;
        let offset = field::required_quantity(FILE_BLOCK, "offset", wire.offset)?;
        let ufs_locations = match wire.ufs_string_locations {
            Some(locations) if !locations.is_empty() => locations,
            _ => wire
                .ufs_locations
                .unwrap_or_default()
                .into_iter()
                .map(legacy_location)
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(FileBlockInfo::new(block_info, offset, ufs_locations)?)
    }
}

impl ToWire for FileBlockInfo {
    type Wire = thrift::FileBlockInfo;

    fn to_wire(&self) -> thrift::FileBlockInfo {
        thrift::FileBlockInfo {
            block_info: Some(self.block_info().to_wire()),
            offset: Some(field::wire_i64(FILE_BLOCK, "offset", self.offset())),
            ufs_locations: Some(
                self.ufs_locations()
                    .iter()
                    .map(|location| legacy_address(location))
                    .collect(),
            ),
            ufs_string_locations: Some(self.ufs_locations().to_vec()),
        }
    }
}

impl FromWire for FileInfo {
    type Wire = thrift::FileInfo;

    fn from_wire(wire: thrift::FileInfo) -> Result<Self> {
        let file_id = field::required_quantity(FILE, "file_id", wire.file_id)?;
        let path = field::required(FILE, "path", wire.path)?;
        let mode = field::required(FILE, "mode", wire.mode)?;
        let mode = u16::try_from(mode)
            .map_err(|_| MalformedWireData::out_of_range(FILE, "mode", mode.into()))?;
        let ttl = field::sentinel_quantity(FILE, "ttl", wire.ttl, thrift::FileInfo::NO_TTL)?
            .map(Duration::from_millis);
        let ttl_action = wire.ttl_action.map(TtlAction::from_wire).transpose()?;
        let in_alluxio_percentage = wire
            .in_alluxio_percentage
            .map(|percentage| field::percentage(FILE, "in_alluxio_percentage", percentage))
            .transpose()?;

        let info = FileInfo::builder(file_id, path)
            .name(field::required(FILE, "name", wire.name)?)
            .ufs_path(field::non_empty(wire.ufs_path))
            .length(field::required_quantity(FILE, "length", wire.length)?)
            .block_size_bytes(field::required_quantity(
                FILE,
                "block_size_bytes",
                wire.block_size_bytes,
            )?)
            .creation_time_ms(field::required_quantity(
                FILE,
                "creation_time_ms",
                wire.creation_time_ms,
            )?)
            .completed(field::required(FILE, "completed", wire.completed)?)
            .folder(field::required(FILE, "folder", wire.folder)?)
            .pinned(field::required(FILE, "pinned", wire.pinned)?)
            .cacheable(field::required(FILE, "cacheable", wire.cacheable)?)
            .persisted(field::required(FILE, "persisted", wire.persisted)?)
            .block_ids(field::quantities(FILE, "block_ids", wire.block_ids)?)
            .in_memory_percentage(field::percentage(
                FILE,
                "in_memory_percentage",
                field::required(FILE, "in_memory_percentage", wire.in_memory_percentage)?,
            )?)
            .last_modification_time_ms(field::required_quantity(
                FILE,
                "last_modification_time_ms",
                wire.last_modification_time_ms,
            )?)
            .ttl(ttl)
            .owner(field::required(FILE, "owner", wire.owner)?)
            .group(field::required(FILE, "group", wire.group)?)
            .mode(mode)
            .persistence_state(persistence_state(field::required(
                FILE,
                "persistence_state",
                wire.persistence_state,
            )?)?)
            .mount_point(field::required(FILE, "mount_point", wire.mount_point)?)
            .file_block_infos(decode_list(wire.file_block_infos.unwrap_or_default())?)
            .ttl_action(ttl_action)
            .mount_id(field::sentinel_quantity(
                FILE,
                "mount_id",
                wire.mount_id,
                thrift::FileInfo::INVALID_MOUNT_ID,
            )?)
            .in_alluxio_percentage(in_alluxio_percentage)
            .build()?;
        Ok(info)
    }
}

impl ToWire for FileInfo {
    type Wire = thrift::FileInfo;

    fn to_wire(&self) -> thrift::FileInfo {
        thrift::FileInfo {
            file_id: Some(field::wire_i64(FILE, "file_id", self.file_id())),
            name: Some(self.name().to_string()),
            path: Some(self.path().to_string()),
            ufs_path: self.ufs_path().map(str::to_string),
            length: Some(field::wire_i64(FILE, "length", self.length())),
            block_size_bytes: Some(field::wire_i64(
                FILE,
                "block_size_bytes",
                self.block_size_bytes(),
            )),
            creation_time_ms: Some(field::wire_i64(
                FILE,
                "creation_time_ms",
                self.creation_time_ms(),
            )),
            completed: Some(self.is_completed()),
            folder: Some(self.is_folder()),
            pinned: Some(self.is_pinned()),
            cacheable: Some(self.is_cacheable()),
            persisted: Some(self.is_persisted()),
            block_ids: Some(field::wire_i64s(FILE, "block_ids", self.block_ids())),
            in_memory_percentage: Some(self.in_memory_percentage().into()),
            last_modification_time_ms: Some(field::wire_i64(
                FILE,
                "last_modification_time_ms",
                self.last_modification_time_ms(),
            )),
            ttl: self.ttl().map(|ttl| field::wire_millis(FILE, "ttl", ttl)),
            owner: Some(self.owner().to_string()),
            group: Some(self.group().to_string()),
            mode: Some(self.mode().into()),
            persistence_state: Some(wire_persistence_state(self.persistence_state()).to_string()),
            mount_point: Some(self.is_mount_point()),
            file_block_infos: Some(encode_list(self.file_block_infos())),
            ttl_action: self.ttl_action().map(|action| action.to_wire()),
            mount_id: self
                .mount_id()
                .map(|mount_id| field::wire_i64(FILE, "mount_id", mount_id)),
            in_alluxio_percentage: self.in_alluxio_percentage().map(i32::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Malformed;

    fn wire_block(block_id: i64) -> thrift::BlockInfo {
        thrift::BlockInfo {
            block_id: Some(block_id),
            length: Some(64),
            locations: Some(Vec::new()),
        }
    }

    fn wire_file() -> thrift::FileInfo {
        thrift::FileInfo {
            file_id: Some(33_554_431),
            name: Some("part-0".to_string()),
            path: Some("/data/part-0".to_string()),
            ufs_path: Some("hdfs://nn:9000/data/part-0".to_string()),
            length: Some(128),
            block_size_bytes: Some(64),
            creation_time_ms: Some(1_500_000_000_000),
            completed: Some(true),
            folder: Some(false),
            pinned: Some(false),
            cacheable: Some(true),
            persisted: Some(true),
            block_ids: Some(vec![1, 2]),
            in_memory_percentage: Some(100),
            last_modification_time_ms: Some(1_500_000_000_500),
            ttl: Some(60_000),
            owner: Some("alluxio".to_string()),
            group: Some("staff".to_string()),
            mode: Some(0o644),
            persistence_state: Some("PERSISTED".to_string()),
            mount_point: Some(false),
            file_block_infos: Some(vec![thrift::FileBlockInfo {
                block_info: Some(wire_block(1)),
                offset: Some(0),
                ufs_locations: Some(vec![thrift::WorkerNetAddress {
                    host: Some("dn1".to_string()),
                    data_port: Some(50010),
                    ..Default::default()
                }]),
                ufs_string_locations: Some(vec!["dn1:50010".to_string()]),
            }]),
            ttl_action: Some(thrift::TTtlAction::FREE),
            mount_id: Some(7),
            in_alluxio_percentage: Some(50),
        }
    }

    #[test]
    fn full_file_info_round_trips_on_the_wire() {
        let info = FileInfo::from_wire(wire_file()).unwrap();
        assert_eq!(info.ufs_path(), Some("hdfs://nn:9000/data/part-0"));
        assert_eq!(info.ttl(), Some(Duration::from_secs(60)));
        assert_eq!(info.ttl_action(), Some(TtlAction::Free));
        assert_eq!(info.mount_id(), Some(7));
        assert_eq!(info.persistence_state(), PersistenceState::Persisted);
        assert_eq!(info.file_block_infos()[0].ufs_locations(), &["dn1:50010"]);
        assert_eq!(info.to_wire(), wire_file());
    }

    #[test]
    fn absent_ufs_path_stays_absent() {
        let wire = thrift::FileInfo {
            ufs_path: None,
            ..wire_file()
        };
        let info = FileInfo::from_wire(wire).unwrap();
        assert_eq!(info.ufs_path(), None);
        assert_eq!(info.to_wire().ufs_path, None);
    }

    #[test]
    fn empty_ufs_path_reads_as_absent() {
        let wire = thrift::FileInfo {
            ufs_path: Some(String::new()),
            ..wire_file()
        };
        let info = FileInfo::from_wire(wire).unwrap();
        assert_eq!(info.ufs_path(), None);
        assert_eq!(info.to_wire().ufs_path, None);
    }

    #[test]
    fn ttl_sentinel_and_zero_are_distinct() {
        let no_ttl = FileInfo::from_wire(thrift::FileInfo {
            ttl: Some(thrift::FileInfo::NO_TTL),
            ..wire_file()
        })
        .unwrap();
        assert_eq!(no_ttl.ttl(), None);
        assert_eq!(no_ttl.to_wire().ttl, None);

        let zero = FileInfo::from_wire(thrift::FileInfo {
            ttl: Some(0),
            ..wire_file()
        })
        .unwrap();
        assert_eq!(zero.ttl(), Some(Duration::ZERO));
        assert_eq!(zero.to_wire().ttl, Some(0));
    }

    #[test]
    fn ttl_below_sentinel_fails() {
        let err = FileInfo::from_wire(thrift::FileInfo {
            ttl: Some(-2),
            ..wire_file()
        })
        .unwrap_err();
        assert_eq!(err, MalformedWireData::out_of_range("FileInfo", "ttl", -2));
    }

    #[test]
    fn mount_id_sentinel_reads_as_absent() {
        let info = FileInfo::from_wire(thrift::FileInfo {
            mount_id: Some(thrift::FileInfo::INVALID_MOUNT_ID),
            ..wire_file()
        })
        .unwrap();
        assert_eq!(info.mount_id(), None);
        assert_eq!(info.to_wire().mount_id, None);
    }

    #[test]
    fn unknown_ttl_action_propagates() {
        let err = FileInfo::from_wire(thrift::FileInfo {
            ttl_action: Some(thrift::TTtlAction(99)),
            ..wire_file()
        })
        .unwrap_err();
        assert_eq!(
            err,
            MalformedWireData::unknown_code("TtlAction", "code", 99)
        );
    }

    #[test]
    fn unknown_persistence_state_fails() {
        let err = FileInfo::from_wire(thrift::FileInfo {
            persistence_state: Some("ARCHIVED".to_string()),
            ..wire_file()
        })
        .unwrap_err();
        assert_eq!(err.field, "persistence_state");
        assert_eq!(
            err.reason,
            Malformed::UnknownEnumName("ARCHIVED".to_string())
        );
    }

    #[test]
    fn persistence_table_is_a_bijection() {
        for state in PersistenceState::ALL {
            let name = wire_persistence_state(state);
            assert_eq!(persistence_state(name.to_string()).unwrap(), state);
        }
    }

    #[test]
    fn missing_boolean_is_not_defaulted() {
        let err = FileInfo::from_wire(thrift::FileInfo {
            pinned: None,
            ..wire_file()
        })
        .unwrap_err();
        assert_eq!(err, MalformedWireData::missing("FileInfo", "pinned"));
    }

    #[test]
    fn relative_path_is_invalid() {
        let err = FileInfo::from_wire(thrift::FileInfo {
            path: Some("data/part-0".to_string()),
            ..wire_file()
        })
        .unwrap_err();
        assert_eq!(err.field, "path");
        assert!(matches!(err.reason, Malformed::Invalid(_)));
    }

    #[test]
    fn nested_block_failure_propagates() {
        let mut wire = wire_file();
        if let Some(blocks) = wire.file_block_infos.as_mut() {
            blocks[0].block_info = Some(thrift::BlockInfo {
                block_id: None,
                ..wire_block(1)
            });
        }
        let err = FileInfo::from_wire(wire).unwrap_err();
        assert_eq!(err, MalformedWireData::missing("BlockInfo", "block_id"));
    }

    #[test]
    fn legacy_ufs_locations_are_read_when_strings_are_empty() {
        let wire = thrift::FileBlockInfo {
            block_info: Some(wire_block(4)),
            offset: Some(0),
            ufs_locations: Some(vec![
                thrift::WorkerNetAddress {
                    host: Some("dn1".to_string()),
                    data_port: Some(50010),
                    ..Default::default()
                },
                thrift::WorkerNetAddress {
                    host: Some("::1".to_string()),
                    data_port: Some(50010),
                    ..Default::default()
                },
                thrift::WorkerNetAddress {
                    host: Some("dn3".to_string()),
                    data_port: Some(-1),
                    ..Default::default()
                },
            ]),
            ufs_string_locations: Some(Vec::new()),
        };

        let info = FileBlockInfo::from_wire(wire).unwrap();
        assert_eq!(info.ufs_locations(), &["dn1:50010", "[::1]:50010", "dn3"]);
    }

    #[test]
    fn legacy_ufs_locations_are_regenerated() {
        let block = BlockInfo::new(4, 64, Vec::new()).unwrap();
        let info = FileBlockInfo::new(
            block,
            0,
            vec![
                "dn1:50010".to_string(),
                "[::1]:50010".to_string(),
                "dn3".to_string(),
            ],
        )
        .unwrap();

        let wire = info.to_wire();
        let legacy = wire.ufs_locations.clone().unwrap();
        assert_eq!(legacy[0].host.as_deref(), Some("dn1"));
        assert_eq!(legacy[0].data_port, Some(50010));
        assert_eq!(legacy[1].host.as_deref(), Some("::1"));
        assert_eq!(legacy[2].host.as_deref(), Some("dn3"));
        assert_eq!(legacy[2].data_port, Some(-1));
        assert_eq!(FileBlockInfo::from_wire(wire).unwrap(), info);
    }

    #[test]
    fn split_host_port_cases() {
        assert_eq!(split_host_port("dn1:50010"), ("dn1", Some(50010)));
        assert_eq!(split_host_port("dn1"), ("dn1", None));
        assert_eq!(split_host_port("dn1:port"), ("dn1:port", None));
        assert_eq!(split_host_port("[fe80::1]:80"), ("fe80::1", Some(80)));
        assert_eq!(split_host_port("[fe80::1]"), ("fe80::1", None));
        assert_eq!(split_host_port("fe80::1"), ("fe80::1", None));
    }
}
