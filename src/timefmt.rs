//! Relative-age labels for article timestamps.
//!
//! Takes the evaluation instant as a parameter so callers stay deterministic
//! under test; [`relative_time_now`] supplies the real clock at the call
//! boundary.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeFmtError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Format `timestamp` (RFC 3339 / ISO-8601) as a coarse "time ago" label
/// relative to `now`.
///
/// The label uses the largest applicable unit among seconds, minutes, hours
/// and days, truncating toward zero, with no singular/plural correction.
/// Timestamps in the future clamp to zero elapsed seconds.
pub fn relative_time(timestamp: &str, now: DateTime<Utc>) -> Result<String, TimeFmtError> {
    let parsed = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|_| TimeFmtError::InvalidTimestamp(timestamp.to_string()))?
        .with_timezone(&Utc);

    let secs = (now - parsed).num_seconds().max(0);

    let label = match secs {
        0..=59 => format!("{} seconds ago", secs),
        60..=3599 => format!("{} minutes ago", secs / 60),
        3600..=86399 => format!("{} hours ago", secs / 3600),
        _ => format!("{} days ago", secs / 86400),
    };

    Ok(label)
}

/// [`relative_time`] against the current wall clock.
pub fn relative_time_now(timestamp: &str) -> Result<String, TimeFmtError> {
    relative_time(timestamp, Utc::now())
}
