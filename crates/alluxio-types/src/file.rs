//! Files, directories, and the blocks that make them up.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::block::BlockInfo;
use crate::error::{Result, ValidationError};
use crate::ttl::TtlAction;
use crate::validate;

const FILE: &str = "FileInfo";

/// Largest permission mode, including the setuid, setgid and sticky bits.
const MAX_MODE: u16 = 0o7777;

/// Where a file stands with respect to the under file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersistenceState {
    NotPersisted,
    ToBePersisted,
    Persisted,
    Lost,
}

impl PersistenceState {
    pub const ALL: [PersistenceState; 4] = [
        Self::NotPersisted,
        Self::ToBePersisted,
        Self::Persisted,
        Self::Lost,
    ];
}

impl fmt::Display for PersistenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotPersisted => "not persisted",
            Self::ToBePersisted => "to be persisted",
            Self::Persisted => "persisted",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// A block within a file, plus where the UFS holds the same byte range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBlockInfo {
    block_info: BlockInfo,
    offset: u64,
    ufs_locations: Vec<String>,
}

impl FileBlockInfo {
    /// `ufs_locations` are `host[:port]` strings, in the order given.
    pub fn new(block_info: BlockInfo, offset: u64, ufs_locations: Vec<String>) -> Result<Self> {
        validate::quantity("FileBlockInfo", "offset", offset)?;
        validate::non_empty_all("FileBlockInfo", "ufs_locations", &ufs_locations)?;
        Ok(Self {
            block_info,
            offset,
            ufs_locations,
        })
    }

    pub fn block_info(&self) -> &BlockInfo {
        &self.block_info
    }

    /// Byte offset of the block within its file.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn ufs_locations(&self) -> &[String] {
        &self.ufs_locations
    }
}

/// Metadata for a file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    file_id: u64,
    name: String,
    path: String,
    ufs_path: Option<String>,
    length: u64,
    block_size_bytes: u64,
    creation_time_ms: u64,
    completed: bool,
    folder: bool,
    pinned: bool,
    cacheable: bool,
    persisted: bool,
    block_ids: Vec<u64>,
    in_memory_percentage: u8,
    last_modification_time_ms: u64,
    #[serde(serialize_with = "crate::ser::opt_duration_millis")]
    ttl: Option<Duration>,
    owner: String,
    group: String,
    mode: u16,
    persistence_state: PersistenceState,
    mount_point: bool,
    file_block_infos: Vec<FileBlockInfo>,
    ttl_action: Option<TtlAction>,
    mount_id: Option<u64>,
    in_alluxio_percentage: Option<u8>,
}

impl FileInfo {
    /// Start building metadata for the file at absolute `path`.
    ///
    /// Every other field starts out zero, empty, false, or absent.
    pub fn builder(file_id: u64, path: impl Into<String>) -> FileInfoBuilder {
        FileInfoBuilder {
            info: FileInfo {
                file_id,
                name: String::new(),
                path: path.into(),
                ufs_path: None,
                length: 0,
                block_size_bytes: 0,
                creation_time_ms: 0,
                completed: false,
                folder: false,
                pinned: false,
                cacheable: false,
                persisted: false,
                block_ids: Vec::new(),
                in_memory_percentage: 0,
                last_modification_time_ms: 0,
                ttl: None,
                owner: String::new(),
                group: String::new(),
                mode: 0,
                persistence_state: PersistenceState::NotPersisted,
                mount_point: false,
                file_block_infos: Vec::new(),
                ttl_action: None,
                mount_id: None,
                in_alluxio_percentage: None,
            },
        }
    }

    pub fn file_id(&self) -> u64 {
        self.file_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The file's location in the UFS, if it has one.
    pub fn ufs_path(&self) -> Option<&str> {
        self.ufs_path.as_deref()
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn block_size_bytes(&self) -> u64 {
        self.block_size_bytes
    }

    pub fn creation_time_ms(&self) -> u64 {
        self.creation_time_ms
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_folder(&self) -> bool {
        self.folder
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn block_ids(&self) -> &[u64] {
        &self.block_ids
    }

    pub fn in_memory_percentage(&self) -> u8 {
        self.in_memory_percentage
    }

    pub fn last_modification_time_ms(&self) -> u64 {
        self.last_modification_time_ms
    }

    /// Time to live, or `None` if the file never expires.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn mode(&self) -> u16 {
        self.mode
    }

    pub fn persistence_state(&self) -> PersistenceState {
        self.persistence_state
    }

    pub fn is_mount_point(&self) -> bool {
        self.mount_point
    }

    pub fn file_block_infos(&self) -> &[FileBlockInfo] {
        &self.file_block_infos
    }

    pub fn ttl_action(&self) -> Option<TtlAction> {
        self.ttl_action
    }

    pub fn mount_id(&self) -> Option<u64> {
        self.mount_id
    }

    pub fn in_alluxio_percentage(&self) -> Option<u8> {
        self.in_alluxio_percentage
    }
}

#[derive(Debug, Clone)]
pub struct FileInfoBuilder {
    info: FileInfo,
}

impl FileInfoBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    pub fn ufs_path(mut self, ufs_path: Option<String>) -> Self {
        self.info.ufs_path = ufs_path;
        self
    }

    pub fn length(mut self, length: u64) -> Self {
        self.info.length = length;
        self
    }

    pub fn block_size_bytes(mut self, bytes: u64) -> Self {
        self.info.block_size_bytes = bytes;
        self
    }

    pub fn creation_time_ms(mut self, millis: u64) -> Self {
        self.info.creation_time_ms = millis;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.info.completed = completed;
        self
    }

    pub fn folder(mut self, folder: bool) -> Self {
        self.info.folder = folder;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.info.pinned = pinned;
        self
    }

    pub fn cacheable(mut self, cacheable: bool) -> Self {
        self.info.cacheable = cacheable;
        self
    }

    pub fn persisted(mut self, persisted: bool) -> Self {
        self.info.persisted = persisted;
        self
    }

    pub fn block_ids(mut self, block_ids: Vec<u64>) -> Self {
        self.info.block_ids = block_ids;
        self
    }

    pub fn in_memory_percentage(mut self, percentage: u8) -> Self {
        self.info.in_memory_percentage = percentage;
        self
    }

    pub fn last_modification_time_ms(mut self, millis: u64) -> Self {
        self.info.last_modification_time_ms = millis;
        self
    }

    pub fn ttl(mut self, ttl: Option<Duration>) -> Self {
        self.info.ttl = ttl;
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.info.owner = owner.into();
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.info.group = group.into();
        self
    }

    pub fn mode(mut self, mode: u16) -> Self {
        self.info.mode = mode;
        self
    }

    pub fn persistence_state(mut self, state: PersistenceState) -> Self {
        self.info.persistence_state = state;
        self
    }

    pub fn mount_point(mut self, mount_point: bool) -> Self {
        self.info.mount_point = mount_point;
        self
    }

    pub fn file_block_infos(mut self, blocks: Vec<FileBlockInfo>) -> Self {
        self.info.file_block_infos = blocks;
        self
    }

    pub fn ttl_action(mut self, action: Option<TtlAction>) -> Self {
        self.info.ttl_action = action;
        self
    }

    pub fn mount_id(mut self, mount_id: Option<u64>) -> Self {
        self.info.mount_id = mount_id;
        self
    }

    pub fn in_alluxio_percentage(mut self, percentage: Option<u8>) -> Self {
        self.info.in_alluxio_percentage = percentage;
        self
    }

    pub fn build(self) -> Result<FileInfo> {
        let info = self.info;
        validate::quantity(FILE, "file_id", info.file_id)?;
        if !info.path.starts_with('/') {
            return Err(ValidationError::new(
                FILE,
                "path",
                format!("'{}' is not absolute", info.path),
            ));
        }
        if let Some(ufs_path) = &info.ufs_path {
            validate::non_empty(FILE, "ufs_path", ufs_path)?;
        }
        validate::quantity(FILE, "length", info.length)?;
        validate::quantity(FILE, "block_size_bytes", info.block_size_bytes)?;
        validate::quantity(FILE, "creation_time_ms", info.creation_time_ms)?;
        validate::quantities(FILE, "block_ids", &info.block_ids)?;
        validate::percentage(FILE, "in_memory_percentage", info.in_memory_percentage)?;
        validate::quantity(
            FILE,
            "last_modification_time_ms",
            info.last_modification_time_ms,
        )?;
        if let Some(ttl) = info.ttl {
            validate::duration_millis(FILE, "ttl", ttl)?;
        }
        if info.mode > MAX_MODE {
            return Err(ValidationError::new(
                FILE,
                "mode",
                format!("{:#o} exceeds {MAX_MODE:#o}", info.mode),
            ));
        }
        if let Some(mount_id) = info.mount_id {
            validate::quantity(FILE, "mount_id", mount_id)?;
        }
        if let Some(percentage) = info.in_alluxio_percentage {
            validate::percentage(FILE, "in_alluxio_percentage", percentage)?;
        }
        Ok(info)
    }
}
