use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{SECONDS_IN_A_DAY, YEAR_ZERO_JANUARY_FIRST_SECONDS};

/// Calendar granularity used by the built-in tick scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl TickUnit {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Year => "years",
            Self::Month => "months",
            Self::Day => "days",
            Self::Hour => "hours",
            Self::Minute => "minutes",
            Self::Second => "seconds",
        }
    }

    /// Zoom levels at which the built-in scale for this unit is shown.
    ///
    /// Chosen for the default base day width (1.0) and zoom delta factor
    /// (1.06): the lower bound is the first zoom at which an average tick is
    /// about two pixels wide.
    #[must_use]
    pub const fn default_zoom_range(self) -> (f64, f64) {
        match self {
            Self::Year => (-89.0, 70.0),
            Self::Month => (-46.0, 110.0),
            Self::Day => (12.0, 160.0),
            Self::Hour => (67.0, 210.0),
            Self::Minute => (137.0, 280.0),
            Self::Second => (207.0, 350.0),
        }
    }

    /// Seconds in one unit for units of constant length.
    #[must_use]
    pub const fn fixed_seconds(self) -> Option<i64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Day => Some(SECONDS_IN_A_DAY),
            Self::Hour => Some(3_600),
            Self::Minute => Some(60),
            Self::Second => Some(1),
        }
    }

    /// Start of the unit containing `date`.
    #[must_use]
    pub fn floor(self, date: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Year => first_of_month(date.year(), 1).unwrap_or(date),
            Self::Month => first_of_month(date.year(), date.month()).unwrap_or(date),
            _ => {
                let unit = self.fixed_seconds().unwrap_or(1);
                let floored = date.timestamp().div_euclid(unit) * unit;
                DateTime::from_timestamp(floored, 0).unwrap_or(date)
            }
        }
    }

    /// Start of the unit following the one starting at `date`.
    #[must_use]
    pub fn next(self, date: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Year => date.checked_add_months(Months::new(12)),
            Self::Month => date.checked_add_months(Months::new(1)),
            _ => date.checked_add_signed(TimeDelta::seconds(self.fixed_seconds()?)),
        }
    }

    /// Every unit start from the unit containing `start` up to `end`
    /// (inclusive), ascending.
    #[must_use]
    pub fn dates_between(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        if start > end {
            return Vec::new();
        }

        let mut dates = Vec::new();
        let mut current = Some(self.floor(start));
        while let Some(date) = current {
            if date > end {
                break;
            }
            dates.push(date);
            current = self.next(date);
        }
        dates
    }

    /// Contiguous integer index of the unit starting at `date`.
    ///
    /// Consecutive units always differ by exactly one.
    #[must_use]
    pub fn index(self, date: DateTime<Utc>) -> i64 {
        match self {
            Self::Year => i64::from(date.year()),
            Self::Month => i64::from(date.year()) * 12 + i64::from(date.month0()),
            _ => {
                let unit = self.fixed_seconds().unwrap_or(1);
                (date.timestamp() - YEAR_ZERO_JANUARY_FIRST_SECONDS).div_euclid(unit)
            }
        }
    }

    /// Days spanned by the unit starting at `date`.
    #[must_use]
    pub fn days_at(self, date: DateTime<Utc>) -> f64 {
        match self {
            Self::Year | Self::Month => {
                let start = self.floor(date);
                self.next(start)
                    .map(|next| (next - start).num_seconds() as f64 / SECONDS_IN_A_DAY as f64)
                    .unwrap_or(if self == Self::Year { 365.0 } else { 30.0 })
            }
            _ => self.fixed_seconds().unwrap_or(1) as f64 / SECONDS_IN_A_DAY as f64,
        }
    }

    /// Numeric label: the year, the 1-based month, the day of month, or the
    /// hour/minute/second component.
    #[must_use]
    pub fn label(self, date: DateTime<Utc>) -> i64 {
        match self {
            Self::Year => i64::from(date.year()),
            Self::Month => i64::from(date.month()),
            Self::Day => i64::from(date.day()),
            Self::Hour => i64::from(date.hour()),
            Self::Minute => i64::from(date.minute()),
            Self::Second => i64::from(date.second()),
        }
    }
}

fn first_of_month(year: i32, month: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::TickUnit;
    use crate::core::primitives::{civil_date, civil_datetime};
    use chrono::Datelike;

    #[test]
    fn months_between_include_containing_month() {
        let start = civil_datetime(2020, 12, 20, 11, 30, 0, 0).expect("start");
        let end = civil_datetime(2021, 3, 5, 12, 0, 0, 0).expect("end");
        let months = TickUnit::Month.dates_between(start, end);
        let labels: Vec<(i32, u32)> = months.iter().map(|d| (d.year(), d.month())).collect();
        assert_eq!(labels, vec![(2020, 12), (2021, 1), (2021, 2), (2021, 3)]);
    }

    #[test]
    fn year_and_month_spans_follow_calendar() {
        let leap = civil_date(2020, 1, 1).expect("date");
        assert_eq!(TickUnit::Year.days_at(leap), 366.0);
        assert_eq!(TickUnit::Month.days_at(civil_date(2021, 2, 1).expect("date")), 28.0);
        assert!((TickUnit::Hour.days_at(leap) - 1.0 / 24.0).abs() <= 1e-15);
    }

    #[test]
    fn indices_are_contiguous_across_boundaries() {
        let start = civil_datetime(1999, 12, 31, 22, 0, 0, 0).expect("start");
        let end = civil_datetime(2000, 1, 1, 2, 0, 0, 0).expect("end");
        for unit in [TickUnit::Month, TickUnit::Day, TickUnit::Hour] {
            let indices: Vec<i64> = unit
                .dates_between(start, end)
                .into_iter()
                .map(|date| unit.index(date))
                .collect();
            assert!(indices.windows(2).all(|pair| pair[1] == pair[0] + 1), "{unit:?}");
        }
    }

    #[test]
    fn negative_years_floor_correctly() {
        let date = civil_datetime(-44, 3, 15, 12, 0, 0, 0).expect("date");
        assert_eq!(TickUnit::Day.floor(date), civil_date(-44, 3, 15).expect("floor"));
        assert_eq!(TickUnit::Day.label(date), 15);
        assert_eq!(TickUnit::Year.label(date), -44);
    }

    #[test]
    fn reversed_range_is_empty() {
        let start = civil_date(2021, 1, 1).expect("start");
        let end = civil_date(2020, 1, 1).expect("end");
        assert!(TickUnit::Day.dates_between(start, end).is_empty());
    }
}
