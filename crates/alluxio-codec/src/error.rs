use std::fmt;

use alluxio_types::ValidationError;

/// Why a wire field could not be translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// A required field was not set.
    Missing,
    /// An integer enum code outside the known table.
    UnknownEnumCode(i32),
    /// A string enum value outside the known table.
    UnknownEnumName(String),
    /// A numeric value outside the domain range.
    OutOfRange(i64),
    /// The value was rejected by the domain type.
    Invalid(String),
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("required field is missing"),
            Self::UnknownEnumCode(code) => write!(f, "unknown enum code {code}"),
            Self::UnknownEnumName(name) => write!(f, "unknown enum value '{name}'"),
            Self::OutOfRange(value) => write!(f, "value {value} is out of range"),
            Self::Invalid(reason) => f.write_str(reason),
        }
    }
}

/// A wire entity could not be translated into its domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed wire data at {entity}.{field}: {reason}")]
pub struct MalformedWireData {
    /// The entity whose field failed, not the outermost entity being decoded.
    pub entity: &'static str,
    pub field: &'static str,
    pub reason: Malformed,
}

impl MalformedWireData {
    pub fn new(entity: &'static str, field: &'static str, reason: Malformed) -> Self {
        Self {
            entity,
            field,
            reason,
        }
    }

    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::new(entity, field, Malformed::Missing)
    }

    pub fn unknown_code(entity: &'static str, field: &'static str, code: i32) -> Self {
        Self::new(entity, field, Malformed::UnknownEnumCode(code))
    }

    pub fn unknown_name(
        entity: &'static str,
        field: &'static str,
        name: impl Into<String>,
    ) -> Self {
        Self::new(entity, field, Malformed::UnknownEnumName(name.into()))
    }

    pub fn out_of_range(entity: &'static str, field: &'static str, value: i64) -> Self {
        Self::new(entity, field, Malformed::OutOfRange(value))
    }
}

impl From<ValidationError> for MalformedWireData {
    fn from(err: ValidationError) -> Self {
        Self::new(err.entity, err.field, Malformed::Invalid(err.reason))
    }
}

pub type Result<T> = std::result::Result<T, MalformedWireData>;

/// Errors that can occur while loading wire documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The document could not be read.
    #[error("failed to load document: {0}")]
    LoadFailed(String),

    /// The document exceeds the configured size limit.
    #[error("document too large ({size} bytes, max {max})")]
    TooLarge { size: u64, max: usize },

    /// The document holds more entities than allowed.
    #[error("document holds too many entities ({count}, max {max})")]
    TooManyEntities { count: usize, max: usize },

    /// The document is not valid JSON or does not match the wire entity.
    #[error("document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The entity tag names no known entity.
    #[error("unknown entity kind '{0}'")]
    UnknownEntity(String),

    /// Strict mode found a field the wire entity does not define.
    #[error("unknown field '{path}' in {entity} document")]
    UnknownField { entity: &'static str, path: String },

    /// An entity was read but failed to decode.
    #[error(transparent)]
    Malformed(#[from] MalformedWireData),
}

pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_entity_and_field() {
        let err = MalformedWireData::unknown_code("TtlAction", "code", 99);
        assert_eq!(
            err.to_string(),
            "malformed wire data at TtlAction.code: unknown enum code 99"
        );
    }

    #[test]
    fn validation_errors_keep_their_location() {
        let err: MalformedWireData =
            ValidationError::new("WorkerNetAddress", "host", "must not be empty").into();
        assert_eq!(err.entity, "WorkerNetAddress");
        assert_eq!(err.field, "host");
        assert_eq!(
            err.reason,
            Malformed::Invalid("must not be empty".to_string())
        );
    }
}
