use clap::{Args, Subcommand};
use std::path::PathBuf;

use alluxio_wire::codec::DocumentConfig;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod decode;
pub mod entities;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode every entity in a wire document and print the domain values.
    Decode(DecodeArgs),
    /// Run round-trip checks on every entity in a wire document.
    Check(CheckArgs),
    /// List entity kinds and the TTL action code table.
    Entities(EntitiesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, config: DocumentConfig) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format, config),
        Command::Check(args) => check::run(args, format, config),
        Command::Entities(args) => entities::run(args, format),
        Command::Version(args) => version::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Wire document (one tagged entity or an array of them).
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Wire document (one tagged entity or an array of them).
    pub path: PathBuf,
}

#[derive(Args, Debug, Default)]
pub struct EntitiesArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
