//! Quick view and supported formats overview

use crate::domain::model::MediaRecord;
use crate::ports::LogPort;

/// File extensions each metadata source handles, with its support level
pub const SUPPORTED_FORMATS: &[(&str, &[&str])] = &[
    (
        "ffprobe (technical data, high support)",
        &[".mov", ".mp4", ".mkv", ".avi", ".webm", ".ts", ".mxf", "and many more"],
    ),
    (
        "lofty (simple tags, limited support)",
        &[".mp3", ".m4a", ".flac", ".wav", ".ogg", ".wma", ".mp4"],
    ),
];

/// One line per metadata source
pub fn supported_formats_lines() -> Vec<String> {
    SUPPORTED_FORMATS
        .iter()
        .map(|(tool, formats)| format!("{}: {}", tool, formats.join(", ")))
        .collect()
}

/// Log the headline facts of a record
pub fn log_quick_view(record: &MediaRecord, log: &dyn LogPort) {
    log.info("--- Quick View ---");
    log.info(&format!("Title: {}", record.display_title()));

    match &record.video_stream {
        Some(video) => {
            log.info(&format!("Resolution: {}", video.resolution()));
            log.info(&format!("FPS: {:.2}", video.avg_frame_rate));
            log.info(&format!("Video Codec: {}", video.codec_name));
        }
        None => log.warn("Video stream details are missing from ffprobe output."),
    }

    log.info(&format!("Duration: {}", record.duration_friendly));
    log.info(&format!("Overall Bitrate: {} Kbps", record.overall_bitrate_kbps));
}
