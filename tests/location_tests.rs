use approx::assert_abs_diff_eq;
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use timeline_rs::core::primitives::{YEAR_ZERO_JANUARY_FIRST_SECONDS, year_zero};
use timeline_rs::core::{
    ViewBounds, Viewport, civil_date, civil_datetime, date_to_position, days_since_year_zero,
    position_to_date, screen_to_position, to_screen_position,
};

#[test]
fn first_day_of_year_one_is_366_days_from_epoch() {
    let date = civil_date(1, 1, 1).expect("year one");
    assert_abs_diff_eq!(date_to_position(1.0, date), 366.0, epsilon = 1e-9);

    let reference = NaiveDate::from_ymd_opt(1, 1, 1).expect("reference")
        - NaiveDate::from_ymd_opt(0, 1, 1).expect("reference");
    assert_eq!(reference.num_days(), 366);
}

#[test]
fn two_digit_years_are_not_shifted_into_the_twentieth_century() {
    let year_fifty = civil_date(50, 6, 1).expect("year 50");
    assert_eq!(year_fifty.year(), 50);

    let days = days_since_year_zero(year_fifty);
    assert!(days < 365.25 * 51.0);
    let back = position_to_date(2.5, date_to_position(2.5, year_fifty));
    assert_eq!((back.year(), back.month(), back.day()), (50, 6, 1));
}

#[test]
fn epoch_anchor_matches_calendar() {
    let epoch = year_zero();
    assert_eq!(epoch.timestamp(), YEAR_ZERO_JANUARY_FIRST_SECONDS);
    assert_eq!((epoch.year(), epoch.month(), epoch.day()), (0, 1, 1));
    assert_eq!(date_to_position(7.0, epoch), 0.0);
}

#[test]
fn negative_positions_map_before_the_epoch() {
    let date = position_to_date(1.0, -1.0);
    assert_eq!((date.year(), date.month(), date.day()), (-1, 12, 31));
}

#[test]
fn fractional_days_keep_time_of_day() {
    let date = civil_datetime(2024, 2, 29, 18, 0, 0, 0).expect("leap day");
    let position = date_to_position(24.0, date);
    let back = position_to_date(24.0, position);
    assert_eq!((back.month(), back.day(), back.hour()), (2, 29, 18));
    assert_abs_diff_eq!(position.rem_euclid(24.0), 18.0, epsilon = 1e-6);
}

#[test]
fn extreme_positions_clamp_instead_of_failing() {
    assert_eq!(
        position_to_date(1.0, f64::INFINITY).timestamp_millis(),
        DateTime::<Utc>::MAX_UTC.timestamp_millis()
    );
    assert_eq!(
        position_to_date(1.0, f64::NEG_INFINITY).timestamp_millis(),
        DateTime::<Utc>::MIN_UTC.timestamp_millis()
    );
    assert_eq!(position_to_date(1.0, f64::NAN), year_zero());
}

#[test]
fn screen_offsets_round_trip_through_bounds() {
    let bounds = ViewBounds::new(Viewport::new(640, 80), 3.0, -12_345.5);
    for offset in [0.0, 1.5, 320.0, 639.0] {
        let position = screen_to_position(offset, bounds);
        assert_abs_diff_eq!(to_screen_position(position, bounds), offset, epsilon = 1e-9);
    }
    assert_eq!(screen_to_position(0.0, bounds), bounds.left);
}
