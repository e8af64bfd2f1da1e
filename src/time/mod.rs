//! Permissive conversions between time representations.
//!
//! Parsing functions return `None` on malformed input instead of an error, so
//! callers must check the result:
//!
//! ```rust
//! use person_attributes::time;
//!
//! assert!(time::local_date_time_of("2017-03-01T10:15:30").is_some());
//! assert!(time::local_date_time_of("yesterday").is_none());
//! ```

mod unit;

use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

#[allow(deprecated)]
pub use unit::{ChronoUnit, TimeUnit, to_chrono_unit, to_time_unit};

const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Parses an ISO-8601 local date-time such as `2017-03-01T10:15:30`.
///
/// Seconds and fractional seconds are optional.
pub fn local_date_time_of(value: &str) -> Option<NaiveDateTime> {
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Parses an ISO-8601 date-time with an offset.
///
/// Accepts `2007-12-03T10:15:30+01:00`, `2007-12-03T09:15:30Z`, and the
/// region-suffixed form `2007-12-03T10:15:30+01:00[Europe/Paris]`. The region
/// id is ignored; the offset is authoritative.
///
/// ```rust
/// use person_attributes::time;
///
/// let zoned = time::zoned_date_time_of("2007-12-03T10:15:30+01:00[Europe/Paris]").unwrap();
/// assert_eq!(zoned.offset().local_minus_utc(), 3600);
/// ```
pub fn zoned_date_time_of(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = strip_region(value)?;

    // RFC 3339 allows a space before the time; ISO-8601 does not.
    if !matches!(value.as_bytes().get(10), Some(b'T' | b't')) {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
}

fn strip_region(value: &str) -> Option<&str> {
    match value.find('[') {
        Some(start) if value.ends_with(']') && start > 0 => Some(&value[..start]),
        Some(_) => None,
        None => Some(value),
    }
}

/// Converts milliseconds since the Unix epoch to a UTC date-time.
///
/// Returns `None` if the instant is out of range.
pub fn zoned_date_time_of_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Converts milliseconds since the Unix epoch to a date-time at `offset`.
pub fn zoned_date_time_of_millis_with_offset(
    millis: i64,
    offset: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    zoned_date_time_of_millis(millis).map(|utc| utc.with_timezone(&offset))
}

/// Converts a [`SystemTime`] to a UTC date-time.
#[deprecated(note = "transition helper; use `DateTime::<Utc>::from` directly")]
pub fn zoned_date_time_of_system_time(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}

/// Converts a date-time to a [`SystemTime`].
#[deprecated(note = "transition helper; use `SystemTime::from` directly")]
pub fn system_time_of<Tz: TimeZone>(time: &DateTime<Tz>) -> SystemTime {
    SystemTime::from(time.clone())
}

/// Milliseconds since the Unix epoch for a date-time.
pub fn epoch_millis_of<Tz: TimeZone>(time: &DateTime<Tz>) -> i64 {
    time.timestamp_millis()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, deprecated)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use chrono::{Datelike, NaiveDate, Timelike};
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_local_date_time_of() {
        let parsed = local_date_time_of("2017-03-01T10:15:30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2017, 3, 1)
            .unwrap()
            .and_hms_opt(10, 15, 30)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_local_date_time_of_optional_parts() {
        assert_eq!(local_date_time_of("2017-03-01T10:15").unwrap().second(), 0);
        assert_eq!(
            local_date_time_of("2017-03-01T10:15:30.250").unwrap().nanosecond(),
            250_000_000
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("not a date" ; "garbage")]
    #[test_case("2017-13-01T10:15:30" ; "bad month")]
    #[test_case("2017-03-01" ; "date only")]
    #[test_case("2017-03-01T10:15:30+01:00" ; "with offset")]
    fn test_local_date_time_of_invalid(value: &str) {
        assert!(local_date_time_of(value).is_none());
    }

    #[test]
    fn test_zoned_date_time_of() {
        let parsed = zoned_date_time_of("2007-12-03T10:15:30+01:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 3600);
        assert_eq!(parsed.with_timezone(&Utc).hour(), 9);
    }

    #[test]
    fn test_zoned_date_time_of_utc_designator() {
        let parsed = zoned_date_time_of("2007-12-03T09:15:30Z").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_zoned_date_time_of_region_suffix() {
        let with_region = zoned_date_time_of("2007-12-03T10:15:30+01:00[Europe/Paris]").unwrap();
        let without = zoned_date_time_of("2007-12-03T10:15:30+01:00").unwrap();
        assert_eq!(with_region, without);
    }

    #[test]
    fn test_zoned_date_time_of_without_seconds() {
        let parsed = zoned_date_time_of("2007-12-03T10:15+01:00").unwrap();
        assert_eq!(parsed.minute(), 15);
    }

    #[test]
    fn test_zoned_date_time_of_lowercase_separator() {
        let lower = zoned_date_time_of("2007-12-03t10:15:30+01:00").unwrap();
        assert_eq!(lower, zoned_date_time_of("2007-12-03T10:15:30+01:00").unwrap());
    }

    #[test_case("" ; "empty")]
    #[test_case("2007-12-03T10:15:30" ; "no offset")]
    #[test_case("[Europe/Paris]" ; "region only")]
    #[test_case("2007-12-03T10:15:30+01:00[Europe/Paris" ; "unterminated region")]
    #[test_case("2007-12-03 10:15:30+01:00" ; "space separator")]
    #[test_case("2007-12-03_10:15:30+01:00" ; "underscore separator")]
    fn test_zoned_date_time_of_invalid(value: &str) {
        assert!(zoned_date_time_of(value).is_none());
    }

    #[test]
    fn test_zoned_date_time_of_millis() {
        let parsed = zoned_date_time_of_millis(1_000).unwrap();
        assert_eq!(parsed.timestamp(), 1);
        assert_eq!(parsed.year(), 1970);

        assert!(zoned_date_time_of_millis(i64::MAX).is_none());
    }

    #[test]
    fn test_zoned_date_time_of_millis_with_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let parsed = zoned_date_time_of_millis_with_offset(0, offset).unwrap();
        assert_eq!(parsed.hour(), 2);
        assert_eq!(epoch_millis_of(&parsed), 0);
    }

    #[test]
    fn test_system_time_conversions() {
        let time = UNIX_EPOCH + Duration::from_millis(1_500);
        let zoned = zoned_date_time_of_system_time(time);
        assert_eq!(epoch_millis_of(&zoned), 1_500);
        assert_eq!(system_time_of(&zoned), time);
    }
}
