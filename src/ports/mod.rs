// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for the external probing tool
pub trait ProbePort: Send + Sync {
    /// Probe a media file and return the tool's JSON document unmodified
    fn probe(&self, file_path: &Path) -> Result<ProbeDocument, DomainError>;
}

/// Port for the embedded tag reader
pub trait TagPort: Send + Sync {
    /// Read title, artist, year and duration from a media file
    fn read_tags(&self, file_path: &Path) -> Result<TagInfo, DomainError>;
}

/// Port for file system operations
pub trait FsPort: Send + Sync {
    /// Resolve a possibly relative path to an absolute one.
    ///
    /// Must not require the path to exist.
    fn resolve_path(&self, file_path: &Path) -> Result<PathBuf, DomainError>;

    /// Check if file exists
    fn file_exists(&self, file_path: &Path) -> bool;

    /// Get file size in bytes
    fn file_size(&self, file_path: &Path) -> Result<u64, DomainError>;
}

/// Port for logging
pub trait LogPort: Send + Sync {
    /// Log debug message
    fn debug(&self, message: &str);

    /// Log info message
    fn info(&self, message: &str);

    /// Log warning message
    fn warn(&self, message: &str);

    /// Log error message
    fn error(&self, message: &str);

    /// Log a condition that aborts the whole operation
    fn critical(&self, message: &str);
}

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl LogLevel {
    /// Parse log level from string
    pub fn parse(level_str: &str) -> Result<Self, DomainError> {
        match level_str.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid log level: {}. Valid levels: trace, debug, info, warn, error, critical",
                level_str
            ))),
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            // tracing has no level above error
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}
