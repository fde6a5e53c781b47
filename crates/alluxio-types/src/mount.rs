use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::validate;

const MOUNT: &str = "MountPointInfo";

/// A UFS mounted into the Alluxio namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPointInfo {
    ufs_uri: String,
    ufs_type: String,
    ufs_capacity_bytes: Option<u64>,
    ufs_used_bytes: Option<u64>,
    read_only: bool,
    properties: BTreeMap<String, String>,
    shared: bool,
}

impl MountPointInfo {
    pub fn builder(ufs_uri: impl Into<String>) -> MountPointInfoBuilder {
        MountPointInfoBuilder {
            info: MountPointInfo {
                ufs_uri: ufs_uri.into(),
                ufs_type: String::new(),
                ufs_capacity_bytes: None,
                ufs_used_bytes: None,
                read_only: false,
                properties: BTreeMap::new(),
                shared: false,
            },
        }
    }

    pub fn ufs_uri(&self) -> &str {
        &self.ufs_uri
    }

    pub fn ufs_type(&self) -> &str {
        &self.ufs_type
    }

    /// `None` when the UFS cannot report its capacity.
    pub fn ufs_capacity_bytes(&self) -> Option<u64> {
        self.ufs_capacity_bytes
    }

    pub fn ufs_used_bytes(&self) -> Option<u64> {
        self.ufs_used_bytes
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn is_shared(&self) -> bool {
        self.shared
    }
}

#[derive(Debug, Clone)]
pub struct MountPointInfoBuilder {
    info: MountPointInfo,
}

impl MountPointInfoBuilder {
    pub fn ufs_type(mut self, ufs_type: impl Into<String>) -> Self {
        self.info.ufs_type = ufs_type.into();
        self
    }

    pub fn ufs_capacity_bytes(mut self, bytes: Option<u64>) -> Self {
        self.info.ufs_capacity_bytes = bytes;
        self
    }

    pub fn ufs_used_bytes(mut self, bytes: Option<u64>) -> Self {
        self.info.ufs_used_bytes = bytes;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.info.read_only = read_only;
        self
    }

    pub fn properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.info.properties = properties;
        self
    }

    pub fn shared(mut self, shared: bool) -> Self {
        self.info.shared = shared;
        self
    }

    pub fn build(self) -> Result<MountPointInfo> {
        let info = self.info;
        validate::non_empty(MOUNT, "ufs_uri", &info.ufs_uri)?;
        if let Some(bytes) = info.ufs_capacity_bytes {
            validate::quantity(MOUNT, "ufs_capacity_bytes", bytes)?;
        }
        if let Some(bytes) = info.ufs_used_bytes {
            validate::quantity(MOUNT, "ufs_used_bytes", bytes)?;
        }
        Ok(info)
    }
}
