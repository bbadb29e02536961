//! Formatting utilities used for CLI and export outputs.

/// Compact duration string: "1h 1m 1s", "59m 59s", "1h", "0s".
///
/// Zero hours and zero minutes are omitted. Seconds are shown when non-zero,
/// or when they are the only component left, so the result is never empty.
/// Negative input is treated as zero.
pub fn format_duration(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }

    parts.join(" ")
}

/// Fixed-width "HH:MM:SS" clock, used by the live status line.
pub fn secs2clock(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
