use serde::Serialize;

use crate::error::Result;
use crate::validate;

/// Master summary. Every field is optional because callers ask for a subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterInfo {
    leader_master_address: Option<String>,
    rpc_port: Option<u16>,
    safe_mode: Option<bool>,
    start_time_ms: Option<u64>,
    up_time_ms: Option<u64>,
    version: Option<String>,
    web_port: Option<u16>,
}

impl MasterInfo {
    pub fn builder() -> MasterInfoBuilder {
        MasterInfoBuilder {
            info: MasterInfo::default(),
        }
    }

    pub fn leader_master_address(&self) -> Option<&str> {
        self.leader_master_address.as_deref()
    }

    pub fn rpc_port(&self) -> Option<u16> {
        self.rpc_port
    }

    pub fn safe_mode(&self) -> Option<bool> {
        self.safe_mode
    }

    pub fn start_time_ms(&self) -> Option<u64> {
        self.start_time_ms
    }

    pub fn up_time_ms(&self) -> Option<u64> {
        self.up_time_ms
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn web_port(&self) -> Option<u16> {
        self.web_port
    }
}

#[derive(Debug, Clone)]
pub struct MasterInfoBuilder {
    info: MasterInfo,
}

impl MasterInfoBuilder {
    pub fn leader_master_address(mut self, address: Option<String>) -> Self {
        self.info.leader_master_address = address;
        self
    }

    pub fn rpc_port(mut self, port: Option<u16>) -> Self {
        self.info.rpc_port = port;
        self
    }

    pub fn safe_mode(mut self, safe_mode: Option<bool>) -> Self {
        self.info.safe_mode = safe_mode;
        self
    }

    pub fn start_time_ms(mut self, millis: Option<u64>) -> Self {
        self.info.start_time_ms = millis;
        self
    }

    pub fn up_time_ms(mut self, millis: Option<u64>) -> Self {
        self.info.up_time_ms = millis;
        self
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.info.version = version;
        self
    }

    pub fn web_port(mut self, port: Option<u16>) -> Self {
        self.info.web_port = port;
        self
    }

    pub fn build(self) -> Result<MasterInfo> {
        let info = self.info;
        if let Some(millis) = info.start_time_ms {
            validate::quantity("MasterInfo", "start_time_ms", millis)?;
        }
        if let Some(millis) = info.up_time_ms {
            validate::quantity("MasterInfo", "up_time_ms", millis)?;
        }
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_master_info_is_valid() {
        let info = MasterInfo::builder().build().unwrap();
        assert_eq!(info, MasterInfo::default());
        assert_eq!(info.web_port(), None);
    }

    #[test]
    fn rejects_unencodable_uptime() {
        let result = MasterInfo::builder().up_time_ms(Some(u64::MAX)).build();
        assert!(result.is_err());
    }
}
