//! Timestamp conversion between dates and Unix milliseconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{AccessKeyError, Result};

/// Largest absolute millisecond offset from the epoch a date may have.
const MAX_TIMESTAMP_MS: f64 = 8.64e15;

/// A date given either as epoch milliseconds or as text.
#[derive(Clone, Debug, PartialEq)]
pub enum DateInput {
    Millis(f64),
    Text(String),
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        Self::Millis(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Millis(value as f64)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Convert a date into Unix milliseconds, rounding down.
///
/// Text is accepted as RFC 3339, RFC 2822, `YYYY-MM-DDTHH:MM:SS[.fff]` or
/// `YYYY-MM-DD`. Forms without an offset are read as UTC.
///
/// ```rust
/// use accesskey_core::format::get_unix_timestamp;
///
/// assert_eq!(get_unix_timestamp("1970-01-02").unwrap(), 86_400_000);
/// assert_eq!(get_unix_timestamp(1500.9).unwrap(), 1500);
/// ```
pub fn get_unix_timestamp(date: impl Into<DateInput>) -> Result<i64> {
    match date.into() {
        DateInput::Millis(ms) => {
            if !ms.is_finite() || ms.abs() > MAX_TIMESTAMP_MS {
                return Err(AccessKeyError::invalid_argument(format!(
                    "timestamp out of range: {ms}"
                )));
            }
            Ok(ms.floor() as i64)
        }
        DateInput::Text(text) => parse_date(text.trim())
            .map(|dt| dt.timestamp_millis())
            .ok_or_else(|| AccessKeyError::invalid_argument(format!("unparseable date: {text:?}"))),
    }
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Format Unix milliseconds as a `YYYY-MM-DD` calendar date in UTC.
///
/// ```rust
/// use accesskey_core::convert_unix_to_iso;
///
/// assert_eq!(convert_unix_to_iso(0).unwrap(), "1970-01-01");
/// ```
pub fn convert_unix_to_iso(timestamp_ms: i64) -> Result<String> {
    if timestamp_ms.unsigned_abs() as f64 > MAX_TIMESTAMP_MS {
        return Err(AccessKeyError::invalid_argument(format!(
            "timestamp out of range: {timestamp_ms}"
        )));
    }
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .ok_or_else(|| {
            AccessKeyError::invalid_argument(format!("timestamp out of range: {timestamp_ms}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_1970() {
        assert_eq!(convert_unix_to_iso(0).unwrap(), "1970-01-01");
    }

    #[test]
    fn test_convert_truncates_time_of_day() {
        // 2024-03-15T23:59:59.999Z
        assert_eq!(convert_unix_to_iso(1_710_547_199_999).unwrap(), "2024-03-15");
        assert_eq!(convert_unix_to_iso(-1).unwrap(), "1969-12-31");
    }

    #[test]
    fn test_convert_rejects_out_of_range() {
        assert!(convert_unix_to_iso(i64::MAX).is_err());
        assert!(convert_unix_to_iso(8_640_000_000_000_001).is_err());
    }

    #[test]
    fn test_timestamp_from_millis_floors() {
        assert_eq!(get_unix_timestamp(1234.7).unwrap(), 1234);
        assert_eq!(get_unix_timestamp(-0.5).unwrap(), -1);
        assert_eq!(get_unix_timestamp(42_i64).unwrap(), 42);
    }

    #[test]
    fn test_timestamp_rejects_non_finite() {
        assert!(get_unix_timestamp(f64::NAN).is_err());
        assert!(get_unix_timestamp(f64::INFINITY).is_err());
    }

    #[test]
    fn test_timestamp_from_text() {
        assert_eq!(get_unix_timestamp("1970-01-01").unwrap(), 0);
        assert_eq!(get_unix_timestamp("1970-01-01T00:00:01Z").unwrap(), 1000);
        assert_eq!(get_unix_timestamp("1970-01-01T01:00:00+01:00").unwrap(), 0);
        assert_eq!(get_unix_timestamp("1970-01-01T00:00:00.250").unwrap(), 250);
        assert_eq!(
            get_unix_timestamp("Thu, 01 Jan 1970 00:00:02 +0000").unwrap(),
            2000
        );
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        let result = get_unix_timestamp("not a date");
        assert!(matches!(result, Err(AccessKeyError::InvalidArgument(_))));
    }

    #[test]
    fn test_round_trip_through_date() {
        let ts = get_unix_timestamp("2025-06-30").unwrap();
        assert_eq!(convert_unix_to_iso(ts).unwrap(), "2025-06-30");
    }
}
