//! Record serialization

use crate::domain::errors::DomainError;
use crate::domain::model::MediaRecord;
use crate::output::OutputFormat;
use crate::utils::Utils;

/// Renders a [`MediaRecord`] in one of the supported output formats
pub struct RecordWriter {
    format: OutputFormat,
}

impl RecordWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, record: &MediaRecord) -> Result<String, DomainError> {
        match self.format {
            OutputFormat::Json => Self::format_as_json(record),
            OutputFormat::Yaml => Self::format_as_yaml(record),
            OutputFormat::Text => Ok(Self::format_as_text(record)),
        }
    }

    /// Format record as JSON
    fn format_as_json(record: &MediaRecord) -> Result<String, DomainError> {
        serde_json::to_string_pretty(record)
            .map_err(|e| DomainError::InternalError(format!("JSON serialization failed: {}", e)))
    }

    /// Format record as YAML
    fn format_as_yaml(record: &MediaRecord) -> Result<String, DomainError> {
        serde_yaml::to_string(record)
            .map_err(|e| DomainError::InternalError(format!("YAML serialization failed: {}", e)))
    }

    /// Format record as human-readable text
    fn format_as_text(record: &MediaRecord) -> String {
        let mut output = String::new();

        output.push_str("Media File Information:\n");
        output.push_str(&format!("  File: {}\n", record.file_path.display()));
        output.push_str(&format!(
            "  Size: {} ({} bytes)\n",
            Utils::format_file_size(record.filesize_bytes),
            record.filesize_bytes
        ));
        output.push_str(&format!("  Title: {}\n", record.title.as_deref().unwrap_or("-")));
        output.push_str(&format!("  Artist: {}\n", record.artist.as_deref().unwrap_or("-")));
        output.push_str(&format!("  Year: {}\n", record.year.as_deref().unwrap_or("-")));
        output.push_str(&format!(
            "  Duration: {} ({:.3}s)\n",
            record.duration_friendly, record.duration_seconds
        ));
        output.push_str(&format!("  Overall Bitrate: {} kbps\n", record.overall_bitrate_kbps));

        match &record.video_stream {
            Some(video) => {
                output.push_str("\nVideo Stream:\n");
                output.push_str(&format!("  Codec: {} ({})\n", video.codec_name, video.profile));
                output.push_str(&format!("  Resolution: {}\n", video.resolution()));
                output.push_str(&format!("  Frame Rate: {:.2} fps\n", video.avg_frame_rate));
                output.push_str(&format!("  Bit Rate: {} bit/s\n", video.bit_rate));
                output.push_str(&format!("  Pixel Format: {}\n", video.pixel_format));
            }
            None => output.push_str("\nVideo Stream: none\n"),
        }

        match &record.audio_stream {
            Some(audio) => {
                output.push_str("\nAudio Stream:\n");
                output.push_str(&format!("  Codec: {}\n", audio.codec_name));
                output.push_str(&format!("  Sample Rate: {} Hz\n", audio.sample_rate));
                output.push_str(&format!(
                    "  Channels: {} ({})\n",
                    audio.channels, audio.channel_layout
                ));
                output.push_str(&format!("  Bit Rate: {} bit/s\n", audio.bit_rate));
            }
            None => output.push_str("\nAudio Stream: none\n"),
        }

        if !record.raw_tags.is_empty() {
            output.push_str("\nTags:\n");
            for (key, value) in &record.raw_tags {
                match value.as_str() {
                    Some(text) => output.push_str(&format!("  {}: {}\n", key, text)),
                    None => output.push_str(&format!("  {}: {}\n", key, value)),
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AudioStreamInfo, RawTags};
    use serde_json::json;
    use std::path::PathBuf;

    fn record() -> MediaRecord {
        let mut raw_tags = RawTags::new();
        raw_tags.insert("encoder".to_string(), json!("Lavf60.3.100"));
        MediaRecord {
            file_path: PathBuf::from("/music/track.m4a"),
            filename: "track.m4a".to_string(),
            filesize_bytes: 2048,
            title: Some("Intro".to_string()),
            artist: Some("Nobody".to_string()),
            year: None,
            duration_seconds: 42.5,
            duration_friendly: "00:00:42".to_string(),
            overall_bitrate_kbps: 256,
            video_stream: None,
            audio_stream: Some(AudioStreamInfo {
                codec_name: "aac".to_string(),
                sample_rate: 44_100,
                channels: 2,
                bit_rate: 256_000,
                channel_layout: "stereo".to_string(),
            }),
            raw_tags,
        }
    }

    #[test]
    fn test_json_output_parses_back() {
        let out = RecordWriter::new(OutputFormat::Json).render(&record()).unwrap();
        let parsed: MediaRecord = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let out = RecordWriter::new(OutputFormat::Yaml).render(&record()).unwrap();
        let parsed: MediaRecord = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn test_text_output() {
        let out = RecordWriter::new(OutputFormat::Text).render(&record()).unwrap();
        assert!(out.contains("Title: Intro"));
        assert!(out.contains("Year: -"));
        assert!(out.contains("Video Stream: none"));
        assert!(out.contains("Sample Rate: 44100 Hz"));
        assert!(out.contains("encoder: Lavf60.3.100"));
    }
}
