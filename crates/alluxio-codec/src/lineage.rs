//! Lineage, its job, and the job's configuration.
//!
//! Ids, times, the job and its fields are required. File and lineage id lists
//! read an unset value as empty.

use alluxio_thrift as thrift;
use alluxio_types::{CommandLineJobInfo, JobConfInfo, LineageInfo};

use crate::convert::{FromWire, ToWire};
use crate::error::Result;
use crate::field;

const CONF: &str = "JobConfInfo";
const JOB: &str = "CommandLineJobInfo";
const LINEAGE: &str = "LineageInfo";

impl FromWire for JobConfInfo {
    type Wire = thrift::JobConfInfo;

    fn from_wire(wire: thrift::JobConfInfo) -> Result<Self> {
        let output_file = field::required(CONF, "output_file", wire.output_file)?;
        Ok(JobConfInfo::new(output_file)?)
    }
}

impl ToWire for JobConfInfo {
    type Wire = thrift::JobConfInfo;

    fn to_wire(&self) -> thrift::JobConfInfo {
        thrift::JobConfInfo {
            output_file: Some(self.output_file().to_string()),
        }
    }
}

impl FromWire for CommandLineJobInfo {
    type Wire = thrift::CommandLineJobInfo;

    fn from_wire(wire: thrift::CommandLineJobInfo) -> Result<Self> {
        let command = field::required(JOB, "command", wire.command)?;
        let conf = JobConfInfo::from_wire(field::required(JOB, "conf", wire.conf)?)?;
        Ok(CommandLineJobInfo::new(command, conf)?)
    }
}

impl ToWire for CommandLineJobInfo {
    type Wire = thrift::CommandLineJobInfo;

    fn to_wire(&self) -> thrift::CommandLineJobInfo {
        thrift::CommandLineJobInfo {
            command: Some(self.command().to_string()),
            conf: Some(self.conf().to_wire()),
        }
    }
}

impl FromWire for LineageInfo {
    type Wire = thrift::LineageInfo;

    fn from_wire(wire: thrift::LineageInfo) -> Result<Self> {
        let id = field::required_quantity(LINEAGE, "id", wire.id)?;
        let job = CommandLineJobInfo::from_wire(field::required(LINEAGE, "job", wire.job)?)?;
        let info = LineageInfo::builder(id, job)
            .input_files(wire.input_files.unwrap_or_default())
            .output_files(wire.output_files.unwrap_or_default())
            .creation_time_ms(field::required_quantity(
                LINEAGE,
                "creation_time_ms",
                wire.creation_time_ms,
            )?)
            .parents(field::quantities(LINEAGE, "parents", wire.parents)?)
            .children(field::quantities(LINEAGE, "children", wire.children)?)
            .build()?;
        Ok(info)
    }
}

impl ToWire for LineageInfo {
    type Wire = thrift::LineageInfo;

    fn to_wire(&self) -> thrift::LineageInfo {
        thrift::LineageInfo {
            id: Some(field::wire_i64(LINEAGE, "id", self.id())),
            input_files: Some(self.input_files().to_vec()),
            output_files: Some(self.output_files().to_vec()),
            job: Some(self.job().to_wire()),
            creation_time_ms: Some(field::wire_i64(
                LINEAGE,
                "creation_time_ms",
                self.creation_time_ms(),
            )),
            parents: Some(field::wire_i64s(LINEAGE, "parents", self.parents())),
            children: Some(field::wire_i64s(LINEAGE, "children", self.children())),
        }
    }
}
