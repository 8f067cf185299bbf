//! Duration formatting

/// Format seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped at 24. Seconds are rounded half-to-even and are not
/// carried into minutes, so `59.6` renders as `00:00:60`.
pub fn format_hms(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = (seconds % 60.0).round_ties_even() as u64;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
