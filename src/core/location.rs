//! Orientation on the timeline.
//!
//! All dates and positions are relative to 0000-01-01T00:00:00Z, which is
//! pixel `0` of the timeline drawing. The width of one day (in pixels) is the
//! base unit for positioning: a position is `days_since_year_zero * day_width`.

use chrono::{DateTime, Utc};

use crate::core::ViewBounds;
use crate::core::primitives::{
    MILLISECONDS_IN_A_DAY, YEAR_ZERO_JANUARY_FIRST_MS, datetime_from_unix_ms,
    days_since_year_zero,
};

/// Determines the date a timeline position refers to.
///
/// Never fails: positions beyond the representable range clamp to the
/// minimum/maximum instant.
#[must_use]
pub fn position_to_date(day_width: f64, position: f64) -> DateTime<Utc> {
    let days_ms = position * MILLISECONDS_IN_A_DAY / day_width;
    datetime_from_unix_ms(days_ms + YEAR_ZERO_JANUARY_FIRST_MS as f64)
}

/// Determines the timeline position of a date.
#[must_use]
pub fn date_to_position(day_width: f64, date: DateTime<Utc>) -> f64 {
    days_since_year_zero(date) * day_width
}

/// Converts a timeline position into a viewport-relative pixel offset.
#[must_use]
pub fn to_screen_position(position: f64, bounds: ViewBounds) -> f64 {
    position - bounds.left
}

/// Converts a viewport-relative pixel offset into a timeline position.
#[must_use]
pub fn screen_to_position(offset_px: f64, bounds: ViewBounds) -> f64 {
    bounds.left + offset_px
}

#[cfg(test)]
mod tests {
    use super::{date_to_position, position_to_date, screen_to_position, to_screen_position};
    use crate::core::primitives::civil_date;
    use crate::core::{ViewBounds, Viewport};
    use chrono::{DateTime, Datelike, Utc};

    #[test]
    fn position_zero_is_year_zero() {
        let date = position_to_date(10.0, 0.0);
        assert_eq!((date.year(), date.month(), date.day()), (0, 1, 1));
    }

    #[test]
    fn date_to_position_scales_with_day_width() {
        let date = civil_date(0, 1, 11).expect("date");
        assert!((date_to_position(1.0, date) - 10.0).abs() <= 1e-9);
        assert!((date_to_position(4.0, date) - 40.0).abs() <= 1e-9);
    }

    #[test]
    fn out_of_range_positions_clamp() {
        let max = position_to_date(1.0, f64::MAX);
        assert_eq!(max.year(), DateTime::<Utc>::MAX_UTC.year());

        let min = position_to_date(1.0, -f64::MAX);
        assert_eq!(min.year(), DateTime::<Utc>::MIN_UTC.year());
    }

    #[test]
    fn screen_mapping_is_relative_to_left_edge() {
        let bounds = ViewBounds::new(Viewport::new(200, 100), 0.0, 1000.0);
        assert_eq!(to_screen_position(1000.0, bounds), 100.0);
        assert_eq!(screen_to_position(100.0, bounds), 1000.0);
    }
}
