//! Time conversions as seen from calling code.

use chrono::{FixedOffset, Utc};
use person_attributes::time;

#[test]
fn test_parse_failures_are_none() {
    assert!(time::local_date_time_of("31/12/2020").is_none());
    assert!(time::zoned_date_time_of("2020-12-31T23:59:59").is_none());
}

#[test]
fn test_millis_roundtrip_through_offset() {
    let millis = 1_600_000_000_123;
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();

    let zoned = time::zoned_date_time_of_millis_with_offset(millis, offset).unwrap();

    assert_eq!(time::epoch_millis_of(&zoned), millis);
    assert_eq!(zoned.with_timezone(&Utc), time::zoned_date_time_of_millis(millis).unwrap());
}

#[test]
fn test_parsed_zoned_matches_epoch() {
    let zoned = time::zoned_date_time_of("1970-01-01T01:00:00+01:00[Europe/Berlin]").unwrap();
    assert_eq!(time::epoch_millis_of(&zoned), 0);
}
