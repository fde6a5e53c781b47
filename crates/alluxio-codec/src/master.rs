//! Meta master summary.
//!
//! Every field relies on the presence indicator alone. A master answers only
//! the fields it was asked for, so an entirely empty value is valid.

use alluxio_thrift as thrift;
use alluxio_types::MasterInfo;

use crate::convert::{FromWire, ToWire};
use crate::error::Result;
use crate::field;

const MASTER: &str = "MasterInfo";

impl FromWire for MasterInfo {
    type Wire = thrift::MasterInfo;

    fn from_wire(wire: thrift::MasterInfo) -> Result<Self> {
        let port = |name, value: Option<i32>| {
            value
                .map(|port| field::port(MASTER, name, port))
                .transpose()
        };
        let millis = |name, value: Option<i64>| {
            value
                .map(|millis| field::non_negative(MASTER, name, millis))
                .transpose()
        };

        let info = MasterInfo::builder()
            .leader_master_address(wire.leader_master_address)
            .rpc_port(port("rpc_port", wire.rpc_port)?)
            .safe_mode(wire.safe_mode)
            .start_time_ms(millis("start_time_ms", wire.start_time_ms)?)
            .up_time_ms(millis("up_time_ms", wire.up_time_ms)?)
            .version(wire.version)
            .web_port(port("web_port", wire.web_port)?)
            .build()?;
        Ok(info)
    }
}

impl ToWire for MasterInfo {
    type Wire = thrift::MasterInfo;

    fn to_wire(&self) -> thrift::MasterInfo {
        thrift::MasterInfo {
            leader_master_address: self.leader_master_address().map(str::to_string),
            rpc_port: self.rpc_port().map(i32::from),
            safe_mode: self.safe_mode(),
            start_time_ms: self
                .start_time_ms()
                .map(|millis| field::wire_i64(MASTER, "start_time_ms", millis)),
            up_time_ms: self
                .up_time_ms()
                .map(|millis| field::wire_i64(MASTER, "up_time_ms", millis)),
            version: self.version().map(str::to_string),
            web_port: self.web_port().map(i32::from),
        }
    }
}
