//! Wire timestamp normalization
//!
//! Every timestamp sent to the server must be an absolute UTC instant.
//! Caller-supplied strings may carry an offset, or be naive local times as
//! typed into a form; naive values are read in the local time zone.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

/// Naive date-time layouts accepted from callers
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying layouts that RFC 3339 parsing rejects (no seconds)
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Timestamp normalization errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Invalid timestamp: {0}")]
    Unparseable(String),

    #[error("Timestamp does not exist in the local time zone: {0}")]
    NonexistentLocalTime(String),
}

/// Parse a caller-supplied timestamp, reading naive values in `tz`
///
/// Date-only values are taken as UTC midnight, matching how browsers read
/// them. A naive time that falls in a DST gap is moved forward by an hour.
pub fn parse_timestamp_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    // chrono's %:z does not take a bare Z
    let with_offset = match trimmed.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        Some(rest) => format!("{}+00:00", rest),
        None => trimmed.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| TimestampError::NonexistentLocalTime(input.to_string()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(TimestampError::Unparseable(input.to_string()))
}

/// Parse a caller-supplied timestamp, reading naive values in local time
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    parse_timestamp_in(input, &Local)
}

/// Render a UTC instant the way it goes on the wire (`2024-01-01T00:00:00.000Z`)
pub fn to_wire(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalize a caller-supplied timestamp to its wire form
pub fn normalize_timestamp_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<String, TimestampError> {
    parse_timestamp_in(input, tz).map(|dt| to_wire(&dt))
}

/// Normalize a caller-supplied timestamp to its wire form, using local time
pub fn normalize_timestamp(input: &str) -> Result<String, TimestampError> {
    normalize_timestamp_in(input, &Local)
}
