//! Display formatting for dashboard numbers, labels and the trends chart.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt::Write as _;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Completed share of all tasks as a whole percentage, or `None` when there
/// are no tasks to divide by.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn completion_rate(completed: u64, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    Some(((completed as f64 / total as f64) * 100.0).round() as u64)
}

/// Width of a distribution bar in percent, clamped to `0..=100`.
#[allow(clippy::cast_precision_loss)]
pub fn share_percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 100.0).clamp(0.0, 100.0)
}

/// `IN_PROGRESS` → `IN PROGRESS`.
pub fn status_label(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Upper-case the first character: `overview` → `Overview`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Average delay in whole days, or `N/A` when nothing was late.
#[allow(clippy::cast_possible_truncation)]
pub fn average_delay_days(seconds: Option<f64>) -> String {
    match seconds {
        Some(value) if value.is_finite() && value != 0.0 => {
            format!("{} days", (value / SECONDS_PER_DAY).round() as i64)
        }
        _ => "N/A".to_owned(),
    }
}

/// Calendar date part of an ISO 8601 timestamp.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split_once('T').map_or(timestamp, |(date, _)| date)
}

pub fn due_date_label(due: Option<&str>) -> String {
    match due {
        Some(ts) if !ts.trim().is_empty() => format!("Due: {}", date_part(ts)),
        _ => "No due date".to_owned(),
    }
}

pub fn risk_label(level: Option<u8>) -> &'static str {
    match level {
        Some(1) => "Very Low",
        Some(2) => "Low",
        Some(3) => "Medium",
        Some(4) => "High",
        Some(5) => "Very High",
        _ => "Unknown",
    }
}

/// Largest value across all series, at least 1 so scaling never divides by zero.
pub fn series_max<'a>(series: impl IntoIterator<Item = &'a [u64]>) -> u64 {
    series.into_iter().flat_map(|s| s.iter().copied()).max().unwrap_or(0).max(1)
}

/// SVG `points` attribute for `values` spread evenly across `width`, with
/// `max` mapped to the top edge.
#[allow(clippy::cast_precision_loss)]
pub fn polyline_points(values: &[u64], width: f64, height: f64, max: u64) -> String {
    let max = max.max(1) as f64;
    let step = if values.len() > 1 { width / (values.len() - 1) as f64 } else { 0.0 };
    let mut points = String::new();
    for (index, value) in values.iter().enumerate() {
        let x = step * index as f64;
        let y = height - (*value as f64 / max).min(1.0) * height;
        if !points.is_empty() {
            points.push(' ');
        }
        let _ = write!(points, "{x:.1},{y:.1}");
    }
    points
}
