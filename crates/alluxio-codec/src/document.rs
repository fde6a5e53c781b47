//! Loading JSON wire documents.
//!
//! A document is one tagged entity or an array of them. Loading yields wire
//! values; decoding them is a separate step so callers can inspect values
//! that do not decode.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::DocumentConfig;
use crate::entity::{decode_entity, DomainEntity, EntityKind, WireEntity};
use crate::error::{DocumentError, DocumentResult};

const ENVELOPE_FIELDS: [&str; 2] = ["entity", "value"];

/// Reads wire documents under a [`DocumentConfig`].
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader {
    config: DocumentConfig,
}

impl DocumentLoader {
    /// Create a loader with default config.
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    /// Create a loader with explicit config.
    pub fn with_config(config: DocumentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Load a document from a regular file. Symlinks are refused.
    pub fn load_file(&self, path: &Path) -> DocumentResult<Vec<WireEntity>> {
        let path_metadata = std::fs::symlink_metadata(path)
            .map_err(|err| DocumentError::LoadFailed(format!("{}: {err}", path.display())))?;
        let file_type = path_metadata.file_type();
        if file_type.is_symlink() {
            return Err(DocumentError::LoadFailed(format!(
                "refusing to load document symlink: {}",
                path.display()
            )));
        }
        if !file_type.is_file() {
            return Err(DocumentError::LoadFailed(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        let file = std::fs::File::open(path).map_err(|err| {
            DocumentError::LoadFailed(format!("failed opening {}: {err}", path.display()))
        })?;
        let opened_metadata = file
            .metadata()
            .map_err(|err| DocumentError::LoadFailed(err.to_string()))?;

        #[cfg(unix)]
        {
            if !same_file_identity(&path_metadata, &opened_metadata) {
                return Err(DocumentError::LoadFailed(format!(
                    "document changed during load: {}",
                    path.display()
                )));
            }
        }

        if opened_metadata.len() > self.config.max_document_size as u64 {
            return Err(DocumentError::TooLarge {
                size: opened_metadata.len(),
                max: self.config.max_document_size,
            });
        }

        debug!(path = %path.display(), bytes = opened_metadata.len(), "loading wire document");
        self.load_reader(file)
    }

    /// Load a document from any reader, reading at most one byte past the
    /// size limit.
    pub fn load_reader<R: Read>(&self, reader: R) -> DocumentResult<Vec<WireEntity>> {
        let max_bytes = self.config.max_document_size;
        let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = Vec::new();
        reader
            .take(read_limit)
            .read_to_end(&mut content)
            .map_err(|err| DocumentError::LoadFailed(err.to_string()))?;
        self.load_bytes(&content)
    }

    /// Parse a document held in memory.
    pub fn load_bytes(&self, bytes: &[u8]) -> DocumentResult<Vec<WireEntity>> {
        if bytes.len() > self.config.max_document_size {
            return Err(DocumentError::TooLarge {
                size: bytes.len() as u64,
                max: self.config.max_document_size,
            });
        }

        let items = match serde_json::from_slice::<Value>(bytes)? {
            Value::Array(items) => items,
            item @ Value::Object(_) => vec![item],
            _ => {
                return Err(DocumentError::InvalidJson(serde::de::Error::custom(
                    "expected an entity object or an array of entities",
                )))
            }
        };
        if items.len() > self.config.max_entities_per_document {
            return Err(DocumentError::TooManyEntities {
                count: items.len(),
                max: self.config.max_entities_per_document,
            });
        }

        let entities = items
            .into_iter()
            .map(|item| self.entity_from_value(item))
            .collect::<DocumentResult<Vec<_>>>()?;
        debug!(
            entities = entities.len(),
            strict = self.config.strict_fields,
            "parsed wire document"
        );
        Ok(entities)
    }

    /// Load and decode every entity in a file.
    pub fn decode_file(&self, path: &Path) -> DocumentResult<Vec<DomainEntity>> {
        decode_all(self.load_file(path)?)
    }

    /// Parse and decode every entity in an in-memory document.
    pub fn decode_bytes(&self, bytes: &[u8]) -> DocumentResult<Vec<DomainEntity>> {
        decode_all(self.load_bytes(bytes)?)
    }

    fn entity_from_value(&self, item: Value) -> DocumentResult<WireEntity> {
        if let Some(tag) = item.get("entity").and_then(Value::as_str) {
            tag.parse::<EntityKind>()?;
        }
        if !self.config.strict_fields {
            return Ok(serde_json::from_value(item)?);
        }

        let wire: WireEntity = serde_json::from_value(item.clone())?;
        let echoed = serde_json::to_value(&wire)?;
        let entity = wire.kind().wire_name();
        if let Value::Object(envelope) = &item {
            if let Some(key) = envelope
                .keys()
                .find(|key| !ENVELOPE_FIELDS.contains(&key.as_str()))
            {
                return Err(DocumentError::UnknownField {
                    entity,
                    path: key.clone(),
                });
            }
        }
        if let Some(path) = first_unknown(&item["value"], &echoed["value"], "") {
            return Err(DocumentError::UnknownField { entity, path });
        }
        Ok(wire)
    }
}

fn decode_all(entities: Vec<WireEntity>) -> DocumentResult<Vec<DomainEntity>> {
    entities
        .into_iter()
        .map(|wire| decode_entity(wire).map_err(DocumentError::from))
        .collect()
}

/// Path of the first non-null input field that did not survive a
/// deserialize and serialize pass.
fn first_unknown(input: &Value, echoed: &Value, prefix: &str) -> Option<String> {
    match (input, echoed) {
        (Value::Object(input), Value::Object(echoed)) => {
            input.iter().find_map(|(key, value)| {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                match echoed.get(key) {
                    _ if value.is_null() => None,
                    None => Some(path),
                    Some(echoed) => first_unknown(value, echoed, &path),
                }
            })
        }
        (Value::Array(input), Value::Array(echoed)) => input
            .iter()
            .zip(echoed)
            .enumerate()
            .find_map(|(index, (value, echoed))| {
                first_unknown(value, echoed, &format!("{prefix}[{index}]"))
            }),
        _ => None,
    }
}

#[cfg(unix)]
fn same_file_identity(
    path_metadata: &std::fs::Metadata,
    opened_metadata: &std::fs::Metadata,
) -> bool {
    use std::os::unix::fs::MetadataExt;
    path_metadata.dev() == opened_metadata.dev() && path_metadata.ino() == opened_metadata.ino()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use alluxio_thrift as thrift;

    use super::*;

    const ADDRESS_DOC: &str = r#"{
        "entity": "worker_net_address",
        "value": { "host": "node1", "rpcPort": 29998, "dataPort": 29999 }
    }"#;

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "alluxio-codec-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn single_entity_document_loads() {
        let entities = DocumentLoader::new()
            .load_bytes(ADDRESS_DOC.as_bytes())
            .unwrap();
        assert_eq!(
            entities,
            vec![WireEntity::WorkerNetAddress(thrift::WorkerNetAddress {
                host: Some("node1".to_string()),
                rpc_port: Some(29998),
                data_port: Some(29999),
                ..Default::default()
            })]
        );
    }

    #[test]
    fn array_document_keeps_order() {
        let doc = format!(r#"[{ADDRESS_DOC}, {{"entity": "ttl_action", "value": 0}}]"#);
        let entities = DocumentLoader::new().load_bytes(doc.as_bytes()).unwrap();
        let kinds: Vec<EntityKind> = entities.iter().map(WireEntity::kind).collect();
        assert_eq!(
            kinds,
            vec![EntityKind::WorkerNetAddress, EntityKind::TtlAction]
        );
    }

    #[test]
    fn decode_bytes_reports_malformed_entities() {
        let doc = r#"{"entity": "worker_net_address", "value": {"rpcPort": 1, "dataPort": 2}}"#;
        let err = DocumentLoader::new()
            .decode_bytes(doc.as_bytes())
            .unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(inner) if inner.field == "host"));
    }

    #[test]
    fn unknown_entity_tag_is_named() {
        let doc = r#"{"entity": "inode", "value": {}}"#;
        let err = DocumentLoader::new()
            .load_bytes(doc.as_bytes())
            .unwrap_err();
        assert!(matches!(err, DocumentError::UnknownEntity(name) if name == "inode"));
    }

    #[test]
    fn scalar_document_is_invalid() {
        let err = DocumentLoader::new().load_bytes(b"42").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidJson(_)));
    }

    #[test]
    fn lenient_mode_ignores_unknown_fields() {
        let doc = r#"{"entity": "job_conf_info", "value": {"outputFile": "/o", "extra": 1}}"#;
        let entities = DocumentLoader::new().load_bytes(doc.as_bytes()).unwrap();
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn strict_mode_names_unknown_fields() {
        let loader = DocumentLoader::with_config(DocumentConfig {
            strict_fields: true,
            ..DocumentConfig::default()
        });

        let doc = r#"{"entity": "block_info", "value": {
            "blockId": 1, "length": 2,
            "locations": [{"workerId": 3, "tierAlias": "MEM", "tier": "MEM"}]
        }}"#;
        let err = loader.load_bytes(doc.as_bytes()).unwrap_err();
        match err {
            DocumentError::UnknownField { entity, path } => {
                assert_eq!(entity, "BlockInfo");
                assert_eq!(path, "locations[0].tier");
            }
            other => panic!("expected an unknown field, got {other:?}"),
        }

        let doc = r#"{"entity": "job_conf_info", "value": {"outputFile": "/o"}, "note": "x"}"#;
        let err = loader.load_bytes(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, DocumentError::UnknownField { ref path, .. } if path == "note"));
    }

    #[test]
    fn strict_mode_accepts_nulls_and_map_keys() {
        let loader = DocumentLoader::with_config(DocumentConfig {
            strict_fields: true,
            ..DocumentConfig::default()
        });
        let doc = r#"{"entity": "mount_point_info", "value": {
            "ufsUri": "s3://bucket", "ufsType": "s3", "ufsPath": null,
            "readOnly": false, "shared": true,
            "properties": {"aws.accessKeyId": "x"}
        }}"#;
        let entities = loader.load_bytes(doc.as_bytes()).unwrap();
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn entity_count_limit_is_enforced() {
        let loader = DocumentLoader::with_config(DocumentConfig {
            max_entities_per_document: 1,
            ..DocumentConfig::default()
        });
        let doc = format!("[{ADDRESS_DOC}, {ADDRESS_DOC}]");
        let err = loader.load_bytes(doc.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::TooManyEntities { count: 2, max: 1 }
        ));
    }

    #[test]
    fn size_limit_is_enforced_on_readers() {
        let loader = DocumentLoader::with_config(DocumentConfig {
            max_document_size: 16,
            ..DocumentConfig::default()
        });
        let err = loader.load_reader(ADDRESS_DOC.as_bytes()).unwrap_err();
        assert!(matches!(err, DocumentError::TooLarge { size: 17, max: 16 }));
    }

    #[test]
    fn load_file_reads_and_decodes() {
        let dir = make_temp_dir("load-file");
        let path = dir.join("address.json");
        std::fs::write(&path, ADDRESS_DOC).unwrap();

        let loader = DocumentLoader::new();
        let entities = loader.decode_file(&path).unwrap();
        assert_eq!(entities[0].kind(), EntityKind::WorkerNetAddress);
        assert_eq!(loader.config(), &DocumentConfig::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn oversized_file_is_rejected_before_reading() {
        let dir = make_temp_dir("oversized");
        let path = dir.join("address.json");
        std::fs::write(&path, ADDRESS_DOC).unwrap();

        let loader = DocumentLoader::with_config(DocumentConfig {
            max_document_size: 8,
            ..DocumentConfig::default()
        });
        let err = loader.load_file(&path).unwrap_err();
        assert!(matches!(err, DocumentError::TooLarge { max: 8, .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_fails_to_load() {
        let dir = make_temp_dir("missing");
        let err = DocumentLoader::new()
            .load_file(&dir.join("absent.json"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::LoadFailed(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_document_is_rejected() {
        let dir = make_temp_dir("symlink");
        let target = dir.join("target.json");
        std::fs::write(&target, ADDRESS_DOC).unwrap();
        let link = dir.join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = DocumentLoader::new().load_file(&link).unwrap_err();
        assert!(matches!(err, DocumentError::LoadFailed(message) if message.contains("symlink")));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
