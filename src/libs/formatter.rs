//! Time and duration formatting shared by the store, reports, and exports.

use chrono::Duration;

/// Timestamp format used for the StartTime/EndTime store columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a duration as "HH:MM" for console display.
///
/// Hours are zero-padded to at least two digits and grow as needed;
/// negative durations are clamped to "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a duration as "H:MM:SS" for the TotalDuration store column.
///
/// Hours have unbounded width without padding; minutes and seconds are
/// zero-padded to two digits. Negative durations are clamped to "0:00:00".
pub fn format_total_duration(duration: &Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}
