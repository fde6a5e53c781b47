//! Stderr logging for the CLI.
//!
//! An explicit `--log-level` applies to the codec and the CLI and caps every
//! other crate at `warn`. Without one, `RUST_LOG` is honored, falling back to
//! [`DEFAULT_DIRECTIVE`].

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_DIRECTIVE: &str = "warn,alluxio_codec=info,alluxio_wire=info";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Filter directive for this level.
    pub fn directive(self) -> String {
        let level = self.as_str();
        let others = match self {
            LogLevel::Off | LogLevel::Error | LogLevel::Warn => level,
            LogLevel::Info | LogLevel::Debug | LogLevel::Trace => "warn",
        };
        format!("{others},alluxio_codec={level},alluxio_wire={level}")
    }
}

pub fn env_filter(level: Option<LogLevel>) -> EnvFilter {
    if let Some(level) = level {
        return EnvFilter::new(level.directive());
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Logs go to stderr so stdout stays parseable.
pub fn init_logging(format: LogFormat, level: Option<LogLevel>) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(level))
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}
