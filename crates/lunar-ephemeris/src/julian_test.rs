use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::julian::{J2000, JulianDay};

#[test]
fn test_j2000_epoch() {
    // 2000 January 1, 12:00 UT is JD 2451545.0 by definition
    let jd = JulianDay::from_calendar(2000, 1, 1, 12, 0, 0.0);
    assert_relative_eq!(jd.value(), J2000.value());
}

#[test]
fn test_known_dates() {
    // Civil midnight starts a half-day earlier than the Julian day
    let midnight = JulianDay::from_calendar(2000, 1, 1, 0, 0, 0.0);
    assert_relative_eq!(midnight.value(), 2_451_544.5);

    // Sputnik launch, 1957 October 4, 19:26:24 UT (a standard test vector)
    let sputnik = JulianDay::from_calendar(1957, 10, 4, 19, 26, 24.0);
    assert_abs_diff_eq!(sputnik.value(), 2_436_116.31, epsilon = 1e-2);

    // January and February route through the previous counting year
    let leap_day = JulianDay::from_calendar(2024, 2, 29, 0, 0, 0.0);
    let march_first = JulianDay::from_calendar(2024, 3, 1, 0, 0, 0.0);
    assert_relative_eq!(march_first - leap_day, 1.0);
}

#[test]
fn test_time_of_day_fraction() {
    let noon = JulianDay::from_calendar(2024, 1, 11, 12, 0, 0.0);
    let midnight = JulianDay::from_calendar(2024, 1, 11, 0, 0, 0.0);
    assert_relative_eq!(noon - midnight, 0.5);

    let with_seconds = JulianDay::from_calendar(2024, 1, 11, 6, 30, 36.0);
    assert_abs_diff_eq!(with_seconds - midnight, 0.271_25, epsilon = 1e-9);
}

#[test]
fn test_day_arithmetic() {
    let jd = JulianDay::new(2_451_545.0);
    let later = jd + 29.5;
    assert_relative_eq!(later.value(), 2_451_574.5);
    assert_relative_eq!(later - jd, 29.5);
    assert_relative_eq!((later - 29.5).value(), jd.value());
    assert!(later > jd);
}

#[test]
fn test_serializes_as_bare_number() {
    let jd = JulianDay::new(2_451_550.1);
    let json = serde_json::to_string(&jd).unwrap();
    assert_eq!(json, "2451550.1");

    let back: JulianDay = serde_json::from_str(&json).unwrap();
    assert_relative_eq!(back.value(), jd.value());
}
