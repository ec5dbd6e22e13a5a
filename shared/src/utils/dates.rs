//! Date parsing and normalization utilities
//!
//! Clients send booking dates in several shapes (calendar widgets send bare
//! dates, others send full timestamps). Everything is normalized to a UTC
//! instant before it reaches the booking engine.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;

/// Accepted naive datetime layouts, tried in order
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Error returned when a date string cannot be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub input: String,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized date: {:?}", self.input)
    }
}

impl std::error::Error for DateParseError {}

/// Parse a client supplied date into a UTC instant
///
/// Accepts RFC 3339 timestamps with any offset, bare `YYYY-MM-DD` dates
/// (midnight UTC) and offset-less timestamps (interpreted as UTC).
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let trimmed = input.trim();
    let err = || DateParseError {
        input: input.to_string(),
    };

    if trimmed.is_empty() {
        return Err(err());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(err)?;
        return Ok(Utc.from_utc_datetime(&midnight));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(err)
}

/// Canonical string form of an instant (RFC 3339, millisecond precision, `Z`)
pub fn to_canonical(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_date_is_midnight_utc() {
        let parsed = parse_instant("2024-01-05").unwrap();
        assert_eq!(to_canonical(&parsed), "2024-01-05T00:00:00.000Z");
    }

    #[test]
    fn test_offset_is_normalized() {
        let parsed = parse_instant("2024-03-01T10:00:00+04:00").unwrap();
        assert_eq!(to_canonical(&parsed), "2024-03-01T06:00:00.000Z");
    }

    #[test]
    fn test_naive_timestamp_is_utc() {
        let parsed = parse_instant("2024-03-01T10:30").unwrap();
        assert_eq!(to_canonical(&parsed), "2024-03-01T10:30:00.000Z");

        let parsed = parse_instant("2024-03-01 10:30:15").unwrap();
        assert_eq!(to_canonical(&parsed), "2024-03-01T10:30:15.000Z");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_instant("").is_err());
        assert!(parse_instant("next tuesday").is_err());
        assert!(parse_instant("2024-02-30").is_err());

        let err = parse_instant("soon").unwrap_err();
        assert!(err.to_string().contains("soon"));
    }
}
