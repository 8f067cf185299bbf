// Domain models - Core types and data structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::DomainError;

/// Placeholder for textual stream fields the probe tool did not report
pub const NOT_AVAILABLE: &str = "N/A";

/// Open key/value bag of format-level tags, passed through without a schema
pub type RawTags = Map<String, Value>;

/// Technical details for the primary video stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStreamInfo {
    /// Video codec (e.g. h264, vp9)
    pub codec_name: String,
    /// Codec profile (e.g. High, Main)
    pub profile: String,
    pub width: u32,
    pub height: u32,
    /// Stream bitrate in bits/s
    pub bit_rate: u64,
    /// Average frames per second (e.g. 29.97)
    pub avg_frame_rate: f64,
    /// Pixel format (e.g. yuv420p)
    pub pixel_format: String,
}

impl VideoStreamInfo {
    /// Resolution as `WIDTHxHEIGHT`
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Technical details for the primary audio stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioStreamInfo {
    /// Audio codec (e.g. aac, mp3)
    pub codec_name: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    pub channels: u32,
    /// Stream bitrate in bits/s
    pub bit_rate: u64,
    /// Channel configuration (e.g. stereo, 5.1)
    pub channel_layout: String,
}

/// Descriptive tags reported by the tag reader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<String>,
    pub duration_seconds: Option<f64>,
}

/// Untyped JSON document produced by the probe tool.
///
/// Only two top-level sections matter: the `format` object and the
/// `streams` array. Everything is kept as raw JSON so that each field can
/// be coerced independently later on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeDocument {
    root: Map<String, Value>,
}

impl ProbeDocument {
    /// Document carrying no technical data
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an already parsed JSON value; the top level must be an object
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DomainError::ProbeFail {
                message: format!("expected a JSON object, got {}", json_type_name(&other)),
                stderr: String::new(),
            }),
        }
    }

    /// Parse probe tool stdout
    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| DomainError::ProbeFail {
            message: format!("could not parse probe output: {}", e),
            stderr: String::new(),
        })?;
        Self::from_value(value)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Raw value of a field in the `format` section
    pub fn format_field(&self, key: &str) -> Option<&Value> {
        self.root
            .get("format")
            .and_then(Value::as_object)
            .and_then(|format| format.get(key))
    }

    /// Entries of the `streams` section, in probe order
    pub fn streams(&self) -> &[Value] {
        self.root
            .get("streams")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Comprehensive metadata record combining filesystem, tag and probe data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Absolute path to the media file
    pub file_path: PathBuf,
    pub filename: String,
    pub filesize_bytes: u64,

    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<String>,

    /// Total duration in seconds
    pub duration_seconds: f64,
    /// Total duration in HH:MM:SS form
    pub duration_friendly: String,
    /// Container-level bitrate in kbps
    pub overall_bitrate_kbps: u64,

    pub video_stream: Option<VideoStreamInfo>,
    pub audio_stream: Option<AudioStreamInfo>,

    /// Other embedded format-level tags (encoder, creation_time, ...)
    #[serde(default)]
    pub raw_tags: RawTags,
}

impl MediaRecord {
    /// Title for display, falling back to the file name
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.filename)
    }
}

/// Human-readable JSON type name for diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
