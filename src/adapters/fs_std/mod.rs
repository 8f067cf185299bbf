// Std filesystem adapter - Path resolution and stat calls

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter over `std::fs`
#[derive(Debug, Default)]
pub struct FsStdAdapter;

impl FsStdAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FsPort for FsStdAdapter {
    fn resolve_path(&self, file_path: &Path) -> Result<PathBuf, DomainError> {
        let absolute = std::path::absolute(file_path).map_err(|e| {
            DomainError::FsFail(format!("Failed to resolve {}: {}", file_path.display(), e))
        })?;

        // Follow symlinks when the target exists, keep the lexical form otherwise
        Ok(fs::canonicalize(&absolute).unwrap_or(absolute))
    }

    fn file_exists(&self, file_path: &Path) -> bool {
        file_path.exists()
    }

    fn file_size(&self, file_path: &Path) -> Result<u64, DomainError> {
        let metadata = fs::metadata(file_path)
            .map_err(|e| DomainError::FsFail(format!("Failed to get file size: {}", e)))?;
        Ok(metadata.len())
    }
}
