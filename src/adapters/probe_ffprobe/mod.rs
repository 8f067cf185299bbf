//! FFprobe adapter for media file probing
//!
//! Runs the `ffprobe` binary as a blocking subprocess and hands back its JSON
//! report. No timeout is applied; a hanging ffprobe hangs the caller.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Binary name used when no explicit path is configured
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    binary: String,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter for the given executable
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self, file_path: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args([
                "-v",
                "error",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(file_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Default for FFprobeAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_FFPROBE)
    }
}

impl ProbePort for FFprobeAdapter {
    fn probe(&self, file_path: &Path) -> Result<ProbeDocument, DomainError> {
        debug!(binary = %self.binary, path = %file_path.display(), "spawning ffprobe");

        let output = self
            .command(file_path)
            .output()
            .map_err(|e| DomainError::ProbeFail {
                message: format!("failed to run {}: {}", self.binary, e),
                stderr: String::new(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(DomainError::ProbeFail {
                message: format!("{} exited with {}", self.binary, output.status),
                stderr,
            });
        }

        ProbeDocument::from_json(&output.stdout).map_err(|e| match e {
            DomainError::ProbeFail { message, .. } => DomainError::ProbeFail { message, stderr },
            other => other,
        })
    }
}
