//! Inclusive purchase-date window.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ArgumentError;

/// Argument name for the lower bound on the wire.
pub const START_DATE_ARGUMENT: &str = "startDate";
/// Argument name for the upper bound on the wire.
pub const END_DATE_ARGUMENT: &str = "endDate";

/// An inclusive `[start, end]` window over order purchase timestamps.
///
/// Bounds are accepted in three ISO 8601 shapes:
///
/// - `2018-01-31` - a calendar date, interpreted as midnight UTC
/// - `2018-01-31T13:45:00` - a local date-time without offset, interpreted as UTC
/// - `2018-01-31T13:45:00-03:00` - an RFC 3339 timestamp, converted to UTC
///
/// A date-only upper bound therefore excludes purchases made later that day.
/// A window whose start is after its end is valid and matches nothing.
///
/// ```
/// use retail_analytics_core::DateRange;
///
/// let range = DateRange::parse("2018-01-01", "2018-01-31").unwrap();
/// assert!(range.contains("2018-01-15T10:00:00Z".parse().unwrap()));
/// assert!(!range.contains("2018-02-01T00:00:00Z".parse().unwrap()));
/// assert!(DateRange::parse("last week", "2018-01-31").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Build a window from already-typed bounds.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Parse a window from caller-supplied ISO strings.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::Missing` when a bound is blank and
    /// `ArgumentError::InvalidDate` when it cannot be parsed.
    pub fn parse(start: &str, end: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            start: parse_bound(START_DATE_ARGUMENT, start)?,
            end: parse_bound(END_DATE_ARGUMENT, end)?,
        })
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `at` falls inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// Whether the window can match anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

fn parse_bound(argument: &'static str, raw: &str) -> Result<DateTime<Utc>, ArgumentError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ArgumentError::Missing(argument));
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(ArgumentError::InvalidDate {
        argument,
        value: value.to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_parse_date_only_is_midnight_utc() {
        let range = DateRange::parse("2018-01-01", "2018-01-31").unwrap();
        assert_eq!(range.start(), utc(2018, 1, 1, 0, 0, 0));
        assert_eq!(range.end(), utc(2018, 1, 31, 0, 0, 0));
    }

    #[test]
    fn test_parse_naive_datetime() {
        let range = DateRange::parse("2018-01-01T08:30:00", "2018-01-01 09:00:00.5").unwrap();
        assert_eq!(range.start(), utc(2018, 1, 1, 8, 30, 0));
        assert_eq!(
            range.end(),
            utc(2018, 1, 1, 9, 0, 0) + chrono::Duration::milliseconds(500)
        );
    }

    #[test]
    fn test_parse_rfc3339_converts_offset() {
        let range = DateRange::parse("2018-01-01T00:00:00-03:00", "2018-01-02T00:00:00Z").unwrap();
        assert_eq!(range.start(), utc(2018, 1, 1, 3, 0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = DateRange::parse("2018-13-01", "2018-01-31").unwrap_err();
        assert_eq!(
            err,
            ArgumentError::InvalidDate {
                argument: "startDate",
                value: "2018-13-01".to_string()
            }
        );

        let err = DateRange::parse("2018-01-01", "31/01/2018").unwrap_err();
        assert_eq!(err.argument(), "endDate");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(
            DateRange::parse("", "2018-01-31").unwrap_err(),
            ArgumentError::Missing("startDate")
        );
        assert_eq!(
            DateRange::parse("2018-01-01", "  ").unwrap_err(),
            ArgumentError::Missing("endDate")
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(utc(2018, 1, 1, 0, 0, 0), utc(2018, 1, 31, 0, 0, 0));
        assert!(range.contains(utc(2018, 1, 1, 0, 0, 0)));
        assert!(range.contains(utc(2018, 1, 31, 0, 0, 0)));
        assert!(range.contains(utc(2018, 1, 15, 12, 0, 0)));
        assert!(!range.contains(utc(2018, 1, 31, 0, 0, 1)));
        assert!(!range.contains(utc(2018, 2, 1, 0, 0, 0)));
        assert!(!range.contains(utc(2017, 12, 31, 23, 59, 59)));
    }

    #[test]
    fn test_reversed_window_is_empty() {
        let range = DateRange::parse("2018-02-01", "2018-01-01").unwrap();
        assert!(range.is_empty());
        assert!(!range.contains(utc(2018, 1, 15, 0, 0, 0)));
    }
}
