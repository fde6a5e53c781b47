mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use alluxio_wire::codec::DocumentConfig;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "alluxio-wire", version, about = "Alluxio wire entity CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Log level for alluxio-wire events (stderr). Defaults to `RUST_LOG`.
    #[arg(
        long,
        value_name = "LEVEL",
        env = "ALLUXIO_WIRE_LOG_LEVEL",
        global = true
    )]
    log_level: Option<LogLevel>,

    /// Reject document fields the wire entity does not define.
    #[arg(long, global = true)]
    strict: bool,

    /// Maximum document size in bytes.
    #[arg(long, value_name = "BYTES", global = true)]
    max_document_size: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn document_config(&self) -> DocumentConfig {
        let mut config = DocumentConfig {
            strict_fields: self.strict,
            ..DocumentConfig::default()
        };
        if let Some(max) = self.max_document_size {
            config.max_document_size = max;
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = cli.document_config();
    let result = cmd::run(cli.command, format, config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
