//! Formatting utilities for human-readable output.
//!
//! This module provides consistent formatting for chunk offsets and
//! backend timestamps across the viewer tables.

use crate::config::LOCAL_TIME_FORMAT;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Format a millisecond offset as `HH:MM:SS`.
///
/// Milliseconds are truncated to whole seconds, never rounded. Hours are
/// zero-padded to two digits but are not capped.
///
/// # Examples
///
/// ```
/// use transcript_core::formatting::ms_to_hms;
///
/// assert_eq!(ms_to_hms(3_661_000), "01:01:01");
/// assert_eq!(ms_to_hms(1_999), "00:00:01");
/// ```
pub fn ms_to_hms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format an ISO-8601 timestamp in the local time zone.
///
/// Timestamps with an offset are converted to local time. Timestamps without
/// one (the backend writes naive `datetime.isoformat()` values) are taken to
/// be local already. Anything unparseable is returned verbatim so the user
/// still sees the raw value.
pub fn format_local_timestamp(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(LOCAL_TIME_FORMAT).to_string();
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));

    match naive {
        Ok(dt) => match Local.from_local_datetime(&dt).earliest() {
            Some(local) => local.format(LOCAL_TIME_FORMAT).to_string(),
            None => dt.format(LOCAL_TIME_FORMAT).to_string(),
        },
        Err(_) => raw.to_string(),
    }
}
