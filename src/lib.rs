//! mediameta Library
//!
//! Extracts descriptive and technical metadata from a single media file by
//! reconciling `ffprobe` output with embedded tags read through `lofty`, and
//! validates the result into one [`MediaRecord`].

use std::path::Path;

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{AppContainer, DefaultAppContainer, ExtractInteractor};
pub use domain::errors::DomainError;
pub use domain::model::{AudioStreamInfo, MediaRecord, ProbeDocument, TagInfo, VideoStreamInfo};
pub use error::{MediaMetaError, MediaMetaResult};

/// Extract metadata for `path` with the default adapters and `ffprobe` from `PATH`
pub fn extract_metadata(path: impl AsRef<Path>) -> MediaMetaResult<Option<MediaRecord>> {
    DefaultAppContainer::new(adapters::probe_ffprobe::DEFAULT_FFPROBE)
        .extract_interactor()
        .extract(path.as_ref())
}
