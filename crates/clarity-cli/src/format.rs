//! Human-readable rendering helpers.

use chrono::NaiveDate;

/// Width of a full bar in [`bar`].
const BAR_WIDTH: usize = 20;

/// Formats seconds as `"1h 5m 3s"`, omitting zero parts.
///
/// Zero (and negative) durations render as `"0s"`.
pub fn format_timespan(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let seconds = seconds % 60;

    let mut parts = Vec::new();
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

/// Formats a date as `"Monday, January 01, 2024"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

/// Renders `value` as a fixed-width bar relative to `max`.
///
/// Non-positive values render empty; any positive value gets at least one cell.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn bar(value: i64, max: i64) -> String {
    if max <= 0 || value <= 0 {
        return "░".repeat(BAR_WIDTH);
    }

    let ratio = (value as f64 / max as f64).min(1.0);
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).max(1);

    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Formats a fraction in `[0, 1]` as a whole percentage.
#[allow(clippy::cast_possible_truncation)]
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}
