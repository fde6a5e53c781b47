//! Worker addresses and worker summaries.
//!
//! `WorkerNetAddress.web_port` is optional by presence alone.
//! `domain_socket_path` is optional by presence or the empty string.
//! `WorkerInfo.state` is a string enum with a closed table.

use alluxio_thrift as thrift;
use alluxio_types::{WorkerInfo, WorkerNetAddress, WorkerState};

use crate::convert::{FromWire, ToWire};
use crate::error::{MalformedWireData, Result};
use crate::field;

const ADDRESS: &str = "WorkerNetAddress";
const WORKER: &str = "WorkerInfo";

impl FromWire for WorkerNetAddress {
    type Wire = thrift::WorkerNetAddress;

    fn from_wire(wire: thrift::WorkerNetAddress) -> Result<Self> {
        let host = field::required(ADDRESS, "host", wire.host)?;
        let rpc_port = field::required_port(ADDRESS, "rpc_port", wire.rpc_port)?;
        let data_port = field::required_port(ADDRESS, "data_port", wire.data_port)?;
        let web_port = wire
            .web_port
            .map(|port| field::port(ADDRESS, "web_port", port))
            .transpose()?;

        let address = WorkerNetAddress::new(host, rpc_port, data_port)?.with_web_port(web_port);
        match field::non_empty(wire.domain_socket_path) {
            Some(path) => Ok(address.with_domain_socket_path(path)?),
            None => Ok(address),
        }
    }
}

impl ToWire for WorkerNetAddress {
    type Wire = thrift::WorkerNetAddress;

    fn to_wire(&self) -> thrift::WorkerNetAddress {
        thrift::WorkerNetAddress {
            host: Some(self.host().to_string()),
            rpc_port: Some(self.rpc_port().into()),
            data_port: Some(self.data_port().into()),
            web_port: self.web_port().map(i32::from),
            domain_socket_path: self.domain_socket_path().map(str::to_string),
        }
    }
}

fn worker_state(name: String) -> Result<WorkerState> {
    match name.as_str() {
        thrift::WorkerInfo::STATE_IN_SERVICE => Ok(WorkerState::InService),
        thrift::WorkerInfo::STATE_OUT_OF_SERVICE => Ok(WorkerState::OutOfService),
        _ => Err(MalformedWireData::unknown_name(WORKER, "state", name)),
    }
}

fn wire_worker_state(state: WorkerState) -> &'static str {
    match state {
        WorkerState::InService => thrift::WorkerInfo::STATE_IN_SERVICE,
        WorkerState::OutOfService => thrift::WorkerInfo::STATE_OUT_OF_SERVICE,
    }
}

impl FromWire for WorkerInfo {
    type Wire = thrift::WorkerInfo;

    fn from_wire(wire: thrift::WorkerInfo) -> Result<Self> {
        let id = field::required_quantity(WORKER, "id", wire.id)?;
        let address =
            WorkerNetAddress::from_wire(field::required(WORKER, "address", wire.address)?)?;
        let last_contact_sec = field::required(WORKER, "last_contact_sec", wire.last_contact_sec)?;
        let last_contact_sec = u32::try_from(last_contact_sec).map_err(|_| {
            MalformedWireData::out_of_range(WORKER, "last_contact_sec", last_contact_sec.into())
        })?;
        let state = worker_state(field::required(WORKER, "state", wire.state)?)?;

        let info = WorkerInfo::builder(id, address, state)
            .last_contact_sec(last_contact_sec)
            .capacity_bytes(field::required_quantity(
                WORKER,
                "capacity_bytes",
                wire.capacity_bytes,
            )?)
            .used_bytes(field::required_quantity(
                WORKER,
                "used_bytes",
                wire.used_bytes,
            )?)
            .start_time_ms(field::required_quantity(
                WORKER,
                "start_time_ms",
                wire.start_time_ms,
            )?)
            .capacity_bytes_on_tiers(field::tier_quantities(
                WORKER,
                "capacity_bytes_on_tiers",
                wire.capacity_bytes_on_tiers,
            )?)
            .used_bytes_on_tiers(field::tier_quantities(
                WORKER,
                "used_bytes_on_tiers",
                wire.used_bytes_on_tiers,
            )?)
            .build()?;
        Ok(info)
    }
}

impl ToWire for WorkerInfo {
    type Wire = thrift::WorkerInfo;

    fn to_wire(&self) -> thrift::WorkerInfo {
        thrift::WorkerInfo {
            id: Some(field::wire_i64(WORKER, "id", self.id())),
            address: Some(self.address().to_wire()),
            last_contact_sec: Some(field::wire_u32(
                WORKER,
                "last_contact_sec",
                self.last_contact_sec(),
            )),
            state: Some(wire_worker_state(self.state()).to_string()),
            capacity_bytes: Some(field::wire_i64(
                WORKER,
                "capacity_bytes",
                self.capacity_bytes(),
            )),
            used_bytes: Some(field::wire_i64(WORKER, "used_bytes", self.used_bytes())),
            start_time_ms: Some(field::wire_i64(
                WORKER,
                "start_time_ms",
                self.start_time_ms(),
            )),
            capacity_bytes_on_tiers: Some(field::wire_tiers(
                WORKER,
                "capacity_bytes_on_tiers",
                self.capacity_bytes_on_tiers(),
            )),
            used_bytes_on_tiers: Some(field::wire_tiers(
                WORKER,
                "used_bytes_on_tiers",
                self.used_bytes_on_tiers(),
            )),
        }
    }
}
