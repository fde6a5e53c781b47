//! Workers and their network addresses.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::validate;

const ADDRESS: &str = "WorkerNetAddress";
const WORKER: &str = "WorkerInfo";

/// Network address of a worker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerNetAddress {
    host: String,
    rpc_port: u16,
    data_port: u16,
    web_port: Option<u16>,
    domain_socket_path: Option<String>,
}

impl WorkerNetAddress {
    /// Create an address. The host must not be empty.
    pub fn new(host: impl Into<String>, rpc_port: u16, data_port: u16) -> Result<Self> {
        let host = host.into();
        validate::non_empty(ADDRESS, "host", &host)?;
        Ok(Self {
            host,
            rpc_port,
            data_port,
            web_port: None,
            domain_socket_path: None,
        })
    }

    pub fn with_web_port(mut self, web_port: Option<u16>) -> Self {
        self.web_port = web_port;
        self
    }

    /// Attach the worker's domain socket for short-circuit reads.
    pub fn with_domain_socket_path(mut self, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        validate::non_empty(ADDRESS, "domain_socket_path", &path)?;
        self.domain_socket_path = Some(path);
        Ok(self)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn data_port(&self) -> u16 {
        self.data_port
    }

    pub fn web_port(&self) -> Option<u16> {
        self.web_port
    }

    pub fn domain_socket_path(&self) -> Option<&str> {
        self.domain_socket_path.as_deref()
    }
}

impl fmt::Display for WorkerNetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.rpc_port)
    }
}

/// Liveness of a worker as tracked by the block master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkerState {
    #[serde(rename = "In Service")]
    InService,
    #[serde(rename = "Out of Service")]
    OutOfService,
}

impl WorkerState {
    pub const ALL: [WorkerState; 2] = [Self::InService, Self::OutOfService];
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InService => f.write_str("in service"),
            Self::OutOfService => f.write_str("out of service"),
        }
    }
}

/// A worker's registration and capacity as reported by the block master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerInfo {
    id: u64,
    address: WorkerNetAddress,
    last_contact_sec: u32,
    state: WorkerState,
    capacity_bytes: u64,
    used_bytes: u64,
    start_time_ms: u64,
    capacity_bytes_on_tiers: BTreeMap<String, u64>,
    used_bytes_on_tiers: BTreeMap<String, u64>,
}

impl WorkerInfo {
    pub fn builder(id: u64, address: WorkerNetAddress, state: WorkerState) -> WorkerInfoBuilder {
        WorkerInfoBuilder {
            info: WorkerInfo {
                id,
                address,
                last_contact_sec: 0,
                state,
                capacity_bytes: 0,
                used_bytes: 0,
                start_time_ms: 0,
                capacity_bytes_on_tiers: BTreeMap::new(),
                used_bytes_on_tiers: BTreeMap::new(),
            },
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn address(&self) -> &WorkerNetAddress {
        &self.address
    }

    /// Seconds since the worker last heartbeated.
    pub fn last_contact_sec(&self) -> u32 {
        self.last_contact_sec
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_bytes
    }

    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    pub fn start_time_ms(&self) -> u64 {
        self.start_time_ms
    }

    pub fn capacity_bytes_on_tiers(&self) -> &BTreeMap<String, u64> {
        &self.capacity_bytes_on_tiers
    }

    pub fn used_bytes_on_tiers(&self) -> &BTreeMap<String, u64> {
        &self.used_bytes_on_tiers
    }
}

#[derive(Debug, Clone)]
pub struct WorkerInfoBuilder {
    info: WorkerInfo,
}

impl WorkerInfoBuilder {
    pub fn last_contact_sec(mut self, seconds: u32) -> Self {
        self.info.last_contact_sec = seconds;
        self
    }

    pub fn capacity_bytes(mut self, bytes: u64) -> Self {
        self.info.capacity_bytes = bytes;
        self
    }

    pub fn used_bytes(mut self, bytes: u64) -> Self {
        self.info.used_bytes = bytes;
        self
    }

    pub fn start_time_ms(mut self, millis: u64) -> Self {
        self.info.start_time_ms = millis;
        self
    }

    pub fn capacity_bytes_on_tiers(mut self, tiers: BTreeMap<String, u64>) -> Self {
        self.info.capacity_bytes_on_tiers = tiers;
        self
    }

    pub fn used_bytes_on_tiers(mut self, tiers: BTreeMap<String, u64>) -> Self {
        self.info.used_bytes_on_tiers = tiers;
        self
    }

    pub fn build(self) -> Result<WorkerInfo> {
        let info = self.info;
        validate::quantity(WORKER, "id", info.id)?;
        if info.last_contact_sec > i32::MAX as u32 {
            return Err(ValidationError::new(
                WORKER,
                "last_contact_sec",
                format!("{} exceeds {}", info.last_contact_sec, i32::MAX),
            ));
        }
        validate::quantity(WORKER, "capacity_bytes", info.capacity_bytes)?;
        validate::quantity(WORKER, "used_bytes", info.used_bytes)?;
        validate::quantity(WORKER, "start_time_ms", info.start_time_ms)?;
        validate::tier_quantities(
            WORKER,
            "capacity_bytes_on_tiers",
            &info.capacity_bytes_on_tiers,
        )?;
        validate::tier_quantities(WORKER, "used_bytes_on_tiers", &info.used_bytes_on_tiers)?;
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_requires_host() {
        let err = WorkerNetAddress::new("", 29998, 29999).unwrap_err();
        assert_eq!(err.entity, "WorkerNetAddress");
        assert_eq!(err.field, "host");
    }

    #[test]
    fn address_optional_parts() {
        let address = WorkerNetAddress::new("node1", 29998, 29999).unwrap();
        assert_eq!(address.web_port(), None);
        assert_eq!(address.domain_socket_path(), None);
        assert_eq!(address.to_string(), "node1:29998");

        let address = address
            .with_web_port(Some(30000))
            .with_domain_socket_path("/tmp/domain")
            .unwrap();
        assert_eq!(address.web_port(), Some(30000));
        assert_eq!(address.domain_socket_path(), Some("/tmp/domain"));
        assert!(WorkerNetAddress::new("node1", 1, 2)
            .unwrap()
            .with_domain_socket_path("")
            .is_err());
    }

    #[test]
    fn worker_builder_validates_tiers() {
        let address = WorkerNetAddress::new("node1", 29998, 29999).unwrap();
        let mut tiers = BTreeMap::new();
        tiers.insert(String::new(), 10);

        let err = WorkerInfo::builder(1, address.clone(), WorkerState::InService)
            .capacity_bytes_on_tiers(tiers)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "capacity_bytes_on_tiers");

        let info = WorkerInfo::builder(1, address, WorkerState::OutOfService)
            .capacity_bytes(1024)
            .used_bytes(512)
            .last_contact_sec(3)
            .build()
            .unwrap();
        assert_eq!(info.capacity_bytes(), 1024);
        assert_eq!(info.state(), WorkerState::OutOfService);
    }

    #[test]
    fn worker_rejects_oversized_contact() {
        let address = WorkerNetAddress::new("node1", 29998, 29999).unwrap();
        let result = WorkerInfo::builder(1, address, WorkerState::InService)
            .last_contact_sec(u32::MAX)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn state_serializes_as_schema_name() {
        let json = serde_json::to_string(&WorkerState::OutOfService).unwrap();
        assert_eq!(json, r#""Out of Service""#);
    }
}
