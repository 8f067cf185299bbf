// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Filesystem operation failed
    #[error("Filesystem error: {0}")]
    FsFail(String),

    /// Probe tool could not run or produced unusable output
    #[error("Probe failed: {message}")]
    ProbeFail { message: String, stderr: String },

    /// Tag reader could not read the file
    #[error("Tag read failed: {0}")]
    TagReadFail(String),

    /// A single field of external data could not be coerced
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for a field coercion failure
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
