use std::path::{Path, PathBuf};
use std::sync::Arc;

use mediameta::adapters::{FFprobeAdapter, FsStdAdapter, LoftyTagAdapter, MemoryLogAdapter};
use mediameta::ports::*;
use mediameta::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Test utilities for metadata extraction
mod test_utils {
    use super::*;

    /// Probe stand-in answering with a fixed document
    pub struct CannedProbe(pub Value);

    impl ProbePort for CannedProbe {
        fn probe(&self, _file_path: &Path) -> Result<ProbeDocument, DomainError> {
            ProbeDocument::from_value(self.0.clone())
        }
    }

    /// Tag reader stand-in that always fails
    pub struct NoTags;

    impl TagPort for NoTags {
        fn read_tags(&self, file_path: &Path) -> Result<TagInfo, DomainError> {
            Err(DomainError::TagReadFail(format!(
                "{}: unsupported",
                file_path.display()
            )))
        }
    }

    /// Mono 16-bit PCM WAV at 8 kHz holding `seconds` of silence
    pub fn create_wav_file(dir: &TempDir, name: &str, seconds: u32) -> PathBuf {
        let data_len = seconds * 16_000;
        let mut wav = Vec::new();
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVEfmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&8_000u32.to_le_bytes());
        wav.extend_from_slice(&16_000u32.to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        wav.resize(wav.len() + data_len as usize, 0);

        let path = dir.path().join(name);
        std::fs::write(&path, wav).unwrap();
        path
    }

    /// Write an opaque media stand-in of `size` bytes
    pub fn create_media_file(dir: &TempDir, name: &str, size: usize) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, vec![0u8; size]).unwrap();
        path
    }

    pub fn interactor(
        probe: Arc<dyn ProbePort>,
        tags: Arc<dyn TagPort>,
        log: Arc<MemoryLogAdapter>,
    ) -> ExtractInteractor {
        ExtractInteractor::new(probe, tags, Arc::new(FsStdAdapter::new()), log)
    }
}

use test_utils::*;

fn mkv_document() -> Value {
    json!({
        "streams": [
            { "index": 0, "codec_type": "video", "codec_name": "vp9", "profile": "Profile 0",
              "width": 3840, "height": 2160, "pix_fmt": "yuv420p10le",
              "avg_frame_rate": "30000/1001" },
            { "index": 1, "codec_type": "audio", "codec_name": "opus", "sample_rate": "48000",
              "channels": 6, "channel_layout": "5.1" },
            { "index": 2, "codec_type": "subtitle", "codec_name": "ass" }
        ],
        "format": {
            "filename": "ignored",
            "duration": "5400.500000",
            "bit_rate": "15999999",
            "tags": { "title": "Feature", "ENCODER": "Lavf60.16.100" }
        }
    })
}

#[test]
fn test_extract_with_real_filesystem() {
    let dir = TempDir::new().unwrap();
    let path = create_media_file(&dir, "feature.mkv", 4096);
    let log = Arc::new(MemoryLogAdapter::new());
    let interactor = interactor(
        Arc::new(CannedProbe(mkv_document())),
        Arc::new(NoTags),
        Arc::clone(&log),
    );

    let record = interactor.extract(&path).unwrap().unwrap();

    assert!(record.file_path.is_absolute());
    assert_eq!(record.filename, "feature.mkv");
    assert_eq!(record.filesize_bytes, 4096);
    assert_eq!(record.title, None);
    assert_eq!(record.duration_seconds, 5400.5);
    assert_eq!(record.duration_friendly, "01:30:00");
    assert_eq!(record.overall_bitrate_kbps, 15999);

    let video = record.video_stream.as_ref().unwrap();
    assert_eq!(video.codec_name, "vp9");
    assert_eq!(video.resolution(), "3840x2160");
    assert!((video.avg_frame_rate - 29.97).abs() < 0.001);
    assert_eq!(video.bit_rate, 0);

    let audio = record.audio_stream.as_ref().unwrap();
    assert_eq!(audio.channels, 6);
    assert_eq!(audio.bit_rate, 0);

    assert_eq!(record.raw_tags.get("ENCODER"), Some(&json!("Lavf60.16.100")));
    assert_eq!(record.display_title(), "feature.mkv");
    assert!(log.contains(LogLevel::Warn, "could not read basic tags"));
}

#[test]
fn test_tagged_file_supplies_duration_and_tags() {
    use lofty::config::WriteOptions;
    use lofty::prelude::*;
    use lofty::tag::{Tag, TagType};

    let dir = TempDir::new().unwrap();
    let path = create_wav_file(&dir, "memo.wav", 3);
    let mut tag = Tag::new(TagType::Id3v2);
    tag.set_title("Voice Memo".to_string());
    tag.set_artist("Archive".to_string());
    tag.set_year(1999);
    tag.save_to_path(&path, WriteOptions::default()).unwrap();

    let document = json!({ "format": { "duration": "0" }, "streams": [] });
    let log = Arc::new(MemoryLogAdapter::new());
    let interactor = interactor(
        Arc::new(CannedProbe(document)),
        Arc::new(LoftyTagAdapter::new()),
        Arc::clone(&log),
    );

    let record = interactor.extract(&path).unwrap().unwrap();

    assert_eq!(record.duration_seconds, 3.0);
    assert_eq!(record.duration_friendly, "00:00:03");
    assert_eq!(record.title.as_deref(), Some("Voice Memo"));
    assert_eq!(record.artist.as_deref(), Some("Archive"));
    assert_eq!(record.year.as_deref(), Some("1999"));
    assert_eq!(record.display_title(), "Voice Memo");
    assert!(log.contains(LogLevel::Info, "Successfully extracted basic tags"));
}

#[test]
fn test_missing_input_is_not_found() {
    let dir = TempDir::new().unwrap();
    let log = Arc::new(MemoryLogAdapter::new());
    let interactor = interactor(
        Arc::new(CannedProbe(mkv_document())),
        Arc::new(NoTags),
        Arc::clone(&log),
    );

    let missing = dir.path().join("gone.mp4");
    let err = interactor.extract(&missing).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, MediaMetaError::InputFileNotFound { .. }));
}

#[test]
fn test_default_adapters_without_ffprobe() {
    let dir = TempDir::new().unwrap();
    let path = create_media_file(&dir, "opaque.mp4", 1000);
    let log = Arc::new(MemoryLogAdapter::new());
    let interactor = interactor(
        Arc::new(FFprobeAdapter::new("/nonexistent/ffprobe-for-tests")),
        Arc::new(LoftyTagAdapter::new()),
        Arc::clone(&log),
    );

    let record = interactor.extract(&path).unwrap().unwrap();

    assert_eq!(record.duration_seconds, 0.0);
    assert_eq!(record.duration_friendly, "00:00:00");
    assert_eq!(record.overall_bitrate_kbps, 0);
    assert!(record.video_stream.is_none());
    assert!(record.audio_stream.is_none());
    assert!(record.raw_tags.is_empty());
    assert_eq!(record.filesize_bytes, 1000);
    assert!(log.contains(LogLevel::Error, "Error running ffprobe"));
}

#[test]
fn test_record_serializes_with_null_streams() {
    let dir = TempDir::new().unwrap();
    let path = create_media_file(&dir, "silent.mov", 10);
    let document = json!({ "format": { "duration": "2" }, "streams": [] });
    let interactor = interactor(
        Arc::new(CannedProbe(document)),
        Arc::new(NoTags),
        Arc::new(MemoryLogAdapter::new()),
    );

    let record = interactor.extract(&path).unwrap().unwrap();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["video_stream"], Value::Null);
    assert_eq!(value["audio_stream"], Value::Null);
    assert_eq!(value["title"], Value::Null);
    assert_eq!(value["duration_seconds"], json!(2.0));
    assert_eq!(value["raw_tags"], json!({}));
}

#[cfg(unix)]
#[test]
fn test_ffprobe_subprocess_document() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = create_media_file(&dir, "talk.mp4", 2048);

    let script = dir.path().join("fake-ffprobe");
    let report = json!({
        "streams": [ { "codec_type": "audio", "codec_name": "mp3", "sample_rate": "22050",
                       "channels": 1, "bit_rate": "64000", "channel_layout": "mono" } ],
        "format": { "duration": "61.2", "bit_rate": "64000" }
    });
    std::fs::write(&script, format!("#!/bin/sh\ncat <<'JSON'\n{}\nJSON\n", report)).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let probe = FFprobeAdapter::new(script.to_string_lossy());
    let document = probe.probe(&path).unwrap();
    assert_eq!(document.streams().len(), 1);

    let interactor = interactor(
        Arc::new(probe),
        Arc::new(NoTags),
        Arc::new(MemoryLogAdapter::new()),
    );
    let record = interactor.extract(&path).unwrap().unwrap();

    assert_eq!(record.duration_friendly, "00:01:01");
    assert_eq!(record.overall_bitrate_kbps, 64);
    assert_eq!(record.audio_stream.unwrap().channel_layout, "mono");
}

#[cfg(unix)]
#[test]
fn test_ffprobe_failure_carries_stderr() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let script = dir.path().join("failing-ffprobe");
    let body = "#!/bin/sh\necho 'Invalid data found when processing input' >&2\nexit 1\n";
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let err = FFprobeAdapter::new(script.to_string_lossy())
        .probe(Path::new("whatever.avi"))
        .unwrap_err();

    match err {
        DomainError::ProbeFail { stderr, .. } => {
            assert_eq!(stderr, "Invalid data found when processing input");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
