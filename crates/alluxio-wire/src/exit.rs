use std::fmt;

use alluxio_wire::codec::DocumentError;

// Exit code constants aligned with sysexits-style semantics.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn document_error(context: &str, err: DocumentError) -> CliError {
    match err {
        DocumentError::LoadFailed(_) => CliError::new(FAILURE, format!("{context}: {err}")),
        DocumentError::TooLarge { .. }
        | DocumentError::TooManyEntities { .. }
        | DocumentError::InvalidJson(_)
        | DocumentError::UnknownEntity(_)
        | DocumentError::UnknownField { .. }
        | DocumentError::Malformed(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

pub fn json_error(err: serde_json::Error) -> CliError {
    CliError::new(INTERNAL, format!("failed to render output: {err}"))
}
