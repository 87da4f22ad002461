use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{TimelineError, TimelineResult};

pub const MILLISECONDS_IN_A_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;
pub const SECONDS_IN_A_DAY: i64 = 24 * 60 * 60;

/// Unix timestamp (seconds) of 0000-01-01T00:00:00Z, proleptic Gregorian.
///
/// This is pixel `0` of every timeline drawing.
pub const YEAR_ZERO_JANUARY_FIRST_SECONDS: i64 = -62_167_219_200;
pub const YEAR_ZERO_JANUARY_FIRST_MS: i64 = YEAR_ZERO_JANUARY_FIRST_SECONDS * 1000;

/// Smallest instant (in unix milliseconds) a timeline date can hold.
#[must_use]
pub fn min_date_ms() -> i64 {
    DateTime::<Utc>::MIN_UTC.timestamp_millis()
}

/// Largest instant (in unix milliseconds) a timeline date can hold.
#[must_use]
pub fn max_date_ms() -> i64 {
    DateTime::<Utc>::MAX_UTC.timestamp_millis()
}

#[must_use]
pub fn year_zero() -> DateTime<Utc> {
    DateTime::from_timestamp(YEAR_ZERO_JANUARY_FIRST_SECONDS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Builds a UTC instant from civil components.
///
/// Years `0..=99` are taken literally (year 1 is 0001, not 1901), so ancient
/// dates land on the same axis the epoch anchor is measured on. `month` and
/// `day` are 1-based.
pub fn civil_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> TimelineResult<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millisecond))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            TimelineError::InvalidData(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{millisecond:03} is not a representable date"
            ))
        })
}

/// Shorthand for midnight of a civil date.
pub fn civil_date(year: i32, month: u32, day: u32) -> TimelineResult<DateTime<Utc>> {
    civil_datetime(year, month, day, 0, 0, 0, 0)
}

/// Fractional days elapsed between 0000-01-01T00:00:00Z and `date`.
#[must_use]
pub fn days_since_year_zero(date: DateTime<Utc>) -> f64 {
    let seconds = date.timestamp() - YEAR_ZERO_JANUARY_FIRST_SECONDS;
    let nanos = f64::from(date.timestamp_subsec_nanos());
    (seconds as f64 + nanos * 1e-9) / SECONDS_IN_A_DAY as f64
}

/// Converts fractional unix milliseconds into a date, clamping to the
/// representable range. `NaN` maps to the year-zero anchor.
#[must_use]
pub fn datetime_from_unix_ms(ms: f64) -> DateTime<Utc> {
    if ms.is_nan() {
        return year_zero();
    }
    let ms = ms.clamp(min_date_ms() as f64, max_date_ms() as f64);
    let seconds = (ms / 1000.0).floor();
    let nanos = ((ms - seconds * 1000.0) * 1e6).round().clamp(0.0, 999_999_999.0);

    DateTime::from_timestamp(seconds as i64, nanos as u32).unwrap_or(if ms < 0.0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
