// File: crates/pulse-core/src/tooltip.rs
// Summary: Tooltip text for a single (row, metric) pair.

use chrono::{Local, TimeZone};

use crate::series::AlignedRow;

/// Marker shown when the metric has no sample at the row's timestamp.
pub const NO_DATA: &str = "no data";

/// Tooltip body: metric name, local wall-clock time, and the value to two
/// decimals (or the no-data marker for an absent sample).
pub fn format_tooltip(row: &AlignedRow, metric: &str) -> String {
    let time = Local
        .timestamp_millis_opt(row.timestamp)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| row.timestamp.to_string());
    match row.value(metric) {
        Some(value) => format!("{metric}\nTime: {time}\nValue: {value:.2}"),
        None => format!("{metric}\nTime: {time}\nValue: {NO_DATA}"),
    }
}
