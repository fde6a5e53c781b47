/// A domain value was rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {entity}.{field}: {reason}")]
pub struct ValidationError {
    /// The entity being constructed.
    pub entity: &'static str,
    /// The offending field.
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(entity: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            entity,
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
