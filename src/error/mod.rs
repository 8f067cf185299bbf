//! Error handling module for mediameta

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors that escape a metadata extraction.
///
/// Degraded conditions (probe or tag failures, malformed streams) and
/// reconciliation failures never show up here; they are logged and turned
/// into missing fields or a missing record.
#[derive(Error, Debug)]
pub enum MediaMetaError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Path resolution or stat failed on an existing file
    #[error("Filesystem error: {message}")]
    FilesystemError { message: String },

}

impl From<DomainError> for MediaMetaError {
    fn from(error: DomainError) -> Self {
        MediaMetaError::FilesystemError {
            message: error.to_string(),
        }
    }
}

impl MediaMetaError {
    /// Whether this is the distinguishable missing-input condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, MediaMetaError::InputFileNotFound { .. })
    }
}

/// Result type alias for mediameta operations
pub type MediaMetaResult<T> = std::result::Result<T, MediaMetaError>;
