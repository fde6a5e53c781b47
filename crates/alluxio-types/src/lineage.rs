//! Lineage records and the command-line jobs that produce their outputs.

use serde::Serialize;

use crate::error::Result;
use crate::validate;

const LINEAGE: &str = "LineageInfo";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfInfo {
    output_file: String,
}

impl JobConfInfo {
    /// `output_file` receives the job's stdout and stderr.
    pub fn new(output_file: impl Into<String>) -> Result<Self> {
        let output_file = output_file.into();
        validate::non_empty("JobConfInfo", "output_file", &output_file)?;
        Ok(Self { output_file })
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandLineJobInfo {
    command: String,
    conf: JobConfInfo,
}

impl CommandLineJobInfo {
    pub fn new(command: impl Into<String>, conf: JobConfInfo) -> Result<Self> {
        let command = command.into();
        validate::non_empty("CommandLineJobInfo", "command", &command)?;
        Ok(Self { command, conf })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn conf(&self) -> &JobConfInfo {
        &self.conf
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageInfo {
    id: u64,
    input_files: Vec<String>,
    output_files: Vec<String>,
    job: CommandLineJobInfo,
    creation_time_ms: u64,
    parents: Vec<u64>,
    children: Vec<u64>,
}

impl LineageInfo {
    pub fn builder(id: u64, job: CommandLineJobInfo) -> LineageInfoBuilder {
        LineageInfoBuilder {
            info: LineageInfo {
                id,
                input_files: Vec::new(),
                output_files: Vec::new(),
                job,
                creation_time_ms: 0,
                parents: Vec::new(),
                children: Vec::new(),
            },
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn input_files(&self) -> &[String] {
        &self.input_files
    }

    pub fn output_files(&self) -> &[String] {
        &self.output_files
    }

    pub fn job(&self) -> &CommandLineJobInfo {
        &self.job
    }

    pub fn creation_time_ms(&self) -> u64 {
        self.creation_time_ms
    }

    /// Ids of the lineages whose outputs this one consumes.
    pub fn parents(&self) -> &[u64] {
        &self.parents
    }

    pub fn children(&self) -> &[u64] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct LineageInfoBuilder {
    info: LineageInfo,
}

impl LineageInfoBuilder {
    pub fn input_files(mut self, files: Vec<String>) -> Self {
        self.info.input_files = files;
        self
    }

    pub fn output_files(mut self, files: Vec<String>) -> Self {
        self.info.output_files = files;
        self
    }

    pub fn creation_time_ms(mut self, millis: u64) -> Self {
        self.info.creation_time_ms = millis;
        self
    }

    pub fn parents(mut self, parents: Vec<u64>) -> Self {
        self.info.parents = parents;
        self
    }

    pub fn children(mut self, children: Vec<u64>) -> Self {
        self.info.children = children;
        self
    }

    pub fn build(self) -> Result<LineageInfo> {
        let info = self.info;
        validate::quantity(LINEAGE, "id", info.id)?;
        validate::non_empty_all(LINEAGE, "input_files", &info.input_files)?;
        validate::non_empty_all(LINEAGE, "output_files", &info.output_files)?;
        validate::quantity(LINEAGE, "creation_time_ms", info.creation_time_ms)?;
        validate::quantities(LINEAGE, "parents", &info.parents)?;
        validate::quantities(LINEAGE, "children", &info.children)?;
        Ok(info)
    }
}
