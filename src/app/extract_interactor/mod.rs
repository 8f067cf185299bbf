// Extract interactor - Reconciles probe and tag metadata into one record

use std::path::Path;
use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::error::{MediaMetaError, MediaMetaResult};
use crate::output::summary::supported_formats_lines;
use crate::ports::*;
use crate::utils::time::format_hms;

/// Interactor for the metadata extraction use case
pub struct ExtractInteractor {
    probe_port: Arc<dyn ProbePort>,
    tag_port: Arc<dyn TagPort>,
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
}

impl ExtractInteractor {
    /// Create new extract interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        tag_port: Arc<dyn TagPort>,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            probe_port,
            tag_port,
            fs_port,
            log_port,
        }
    }

    /// Extract a validated metadata record for one file.
    ///
    /// Returns `Err` only when the input cannot be found or stat'ed.
    /// `Ok(None)` means reconciliation or validation failed; the reason has
    /// been logged.
    pub fn extract(&self, file_path: &Path) -> MediaMetaResult<Option<MediaRecord>> {
        let path = self.fs_port.resolve_path(file_path)?;
        self.log_port
            .info(&format!("Validating input file: {}", path.display()));
        if !self.fs_port.file_exists(&path) {
            return Err(MediaMetaError::InputFileNotFound {
                path: path.display().to_string(),
            });
        }

        for line in supported_formats_lines() {
            self.log_port.debug(&line);
        }

        let name = file_name(&path);
        self.log_port.info(&format!("Processing file: {}", name));

        let tags = self.read_tags(&path, &name);
        let document = self.extract_probe_data(&path, &name);
        let (video_stream, audio_stream) = self.classify_streams(&document, &name);

        let Some(duration_seconds) = self.reconcile_duration(&document, tags.as_ref(), &name) else {
            return Ok(None);
        };
        let overall_bitrate_kbps = self.reconcile_bitrate(&document, &name);

        let raw_tags = match RecordValidator::raw_tags(document.format_field("tags")) {
            Ok(raw_tags) => raw_tags,
            Err(e) => {
                self.log_port
                    .error(&format!("Error validating metadata in {}: {}", name, e));
                return Ok(None);
            }
        };

        let filesize_bytes = self.fs_port.file_size(&path)?;
        let tags = tags.unwrap_or_default();

        let record = MediaRecord {
            file_path: path,
            filename: name.clone(),
            filesize_bytes,
            title: tags.title,
            artist: tags.artist,
            year: tags.year,
            duration_seconds,
            duration_friendly: format_hms(duration_seconds),
            overall_bitrate_kbps,
            video_stream,
            audio_stream,
            raw_tags,
        };

        if let Err(e) = RecordValidator::validate(&record) {
            self.log_port
                .error(&format!("Error validating metadata in {}: {}", name, e));
            return Ok(None);
        }

        self.log_port
            .info(&format!("Metadata successfully validated for {}.", name));
        Ok(Some(record))
    }

    /// Tag reader call; any failure degrades to "no tag data"
    fn read_tags(&self, path: &Path, name: &str) -> Option<TagInfo> {
        match self.tag_port.read_tags(path) {
            Ok(tags) => {
                self.log_port.info("Successfully extracted basic tags.");
                Some(tags)
            }
            Err(e) => {
                self.log_port.warn(&format!(
                    "Tag reader error: could not read basic tags from {}: {}",
                    name, e
                ));
                None
            }
        }
    }

    /// Probe tool call; any failure degrades to an empty document
    pub fn extract_probe_data(&self, path: &Path, name: &str) -> ProbeDocument {
        self.log_port.info(&format!("Running ffprobe on {}...", name));
        match self.probe_port.probe(path) {
            Ok(document) => {
                self.log_port
                    .info(&format!("ffprobe successful for {}.", name));
                if document.is_empty() {
                    self.log_port
                        .warn(&format!("ffprobe reported nothing for {}.", name));
                }
                document
            }
            Err(DomainError::ProbeFail { message, stderr }) => {
                let detail = if stderr.is_empty() {
                    message
                } else {
                    format!("{}: {}", message, stderr)
                };
                self.log_port
                    .error(&format!("Error running ffprobe on {}: {}", name, detail));
                ProbeDocument::empty()
            }
            Err(e) => {
                self.log_port
                    .error(&format!("Error running ffprobe on {}: {}", name, e));
                ProbeDocument::empty()
            }
        }
    }

    /// First video and first audio stream, skipping malformed entries
    fn classify_streams(
        &self,
        document: &ProbeDocument,
        name: &str,
    ) -> (Option<VideoStreamInfo>, Option<AudioStreamInfo>) {
        let mut video: Option<VideoStreamInfo> = None;
        let mut audio: Option<AudioStreamInfo> = None;

        for (index, stream) in document.streams().iter().enumerate() {
            let outcome = match StreamMapper::classify(stream) {
                Ok(StreamKind::Video) if video.is_none() => {
                    StreamMapper::video(stream).map(|info| video = Some(info))
                }
                Ok(StreamKind::Audio) if audio.is_none() => {
                    StreamMapper::audio(stream).map(|info| audio = Some(info))
                }
                Ok(kind @ (StreamKind::Video | StreamKind::Audio)) => {
                    self.log_port.debug(&format!(
                        "Ignoring additional {:?} stream #{} in {}",
                        kind, index, name
                    ));
                    Ok(())
                }
                Ok(StreamKind::Other) => Ok(()),
                Err(e) => Err(e),
            };

            if let Err(e) = outcome {
                self.log_port.error(&format!(
                    "Error processing stream in {}: {}. Stream data: {}",
                    name, e, stream
                ));
            }
        }

        if video.is_some() {
            self.log_port.debug("Video stream metadata extracted.");
        }
        if audio.is_some() {
            self.log_port.debug("Audio stream metadata extracted.");
        }
        (video, audio)
    }

    /// Duration per [`DURATION_PRECEDENCE`]; `None` when the probe value is unparseable
    fn reconcile_duration(
        &self,
        document: &ProbeDocument,
        tags: Option<&TagInfo>,
        name: &str,
    ) -> Option<f64> {
        let probe_duration = match DurationReconciler::probe_duration(document) {
            Ok(duration) => duration,
            Err(e) => {
                self.log_port
                    .error(&format!("Error validating metadata in {}: {}", name, e));
                return None;
            }
        };

        let (duration, source) = DurationReconciler::reconcile(probe_duration, tags);
        self.log_port.debug(&format!(
            "Duration {:.3}s taken from {:?} source",
            duration, source
        ));
        Some(duration)
    }

    /// Overall bitrate in kbps; unusable values degrade to 0
    fn reconcile_bitrate(&self, document: &ProbeDocument, name: &str) -> u64 {
        overall_bitrate_kbps(document).unwrap_or_else(|e| {
            self.log_port
                .warn(&format!("Ignoring overall bitrate of {}: {}", name, e));
            0
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
