//! Helper functions and utilities
//!
//! Date handling and display helpers shared by the CLI and embedding UIs.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::models::AttendanceStatus;
use crate::utils::errors::{AttendanceError, Result};

/// Today's local calendar date as `YYYY-MM-DD`
pub fn get_current_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Render a date string in long form, e.g. `January 5, 2024`
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS`. The
/// calendar date written in the input is the one rendered; no time zone
/// shift is applied.
pub fn format_date(date: &str) -> Result<String> {
    let trimmed = date.trim();

    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .ok_or_else(|| AttendanceError::InvalidInput(format!("Invalid date: {}", date)))?;

    Ok(parsed.format("%B %-d, %Y").to_string())
}

/// CSS class for an attendance status, matched case-insensitively
///
/// Unknown statuses map to an empty string.
pub fn attendance_status_class(status: &str) -> &'static str {
    status
        .parse::<AttendanceStatus>()
        .map(AttendanceStatus::css_class)
        .unwrap_or("")
}
