use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TickUnit;
use crate::core::primitives::days_since_year_zero;
use crate::error::{TimelineError, TimelineResult};

/// Enumerates every scale-aligned instant between two dates.
pub type DateEnumerator =
    Arc<dyn Fn(DateTime<Utc>, DateTime<Utc>) -> Vec<DateTime<Utc>> + Send + Sync>;
/// Produces the label shown for a tick.
pub type TickLabeler = Arc<dyn Fn(DateTime<Utc>) -> TickLabel + Send + Sync>;
/// Maps a scale-aligned instant to its contiguous integer index.
pub type TickIndexer = Arc<dyn Fn(DateTime<Utc>) -> i64 + Send + Sync>;
/// Days spanned by the tick starting at a date.
pub type DayFactorFn = Arc<dyn Fn(DateTime<Utc>) -> f64 + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickLabel {
    Number(i64),
    Text(String),
}

impl fmt::Display for TickLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Relationship between one day and one tick of a scale.
///
/// `Fixed(1.0 / 24.0)` is an hour; `PerDate` covers variable-length units such
/// as months and years.
#[derive(Clone)]
pub enum DayFactor {
    Fixed(f64),
    PerDate(DayFactorFn),
}

impl DayFactor {
    #[must_use]
    pub fn days_at(&self, date: DateTime<Utc>) -> f64 {
        match self {
            Self::Fixed(days) => *days,
            Self::PerDate(days_at) => days_at(date),
        }
    }
}

impl fmt::Debug for DayFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(days) => f.debug_tuple("Fixed").field(days).finish(),
            Self::PerDate(_) => f.write_str("PerDate(..)"),
        }
    }
}

/// Configuration of one tick scale (years, months, days, ...).
///
/// A scale renders only while `min_zoom <= zoom <= max_zoom`. Scales are
/// independent of one another; nesting order is presentational.
#[derive(Clone)]
pub struct TickScale {
    id: String,
    min_zoom: f64,
    max_zoom: f64,
    day_factor: DayFactor,
    dates_between: Option<DateEnumerator>,
    label: TickLabeler,
    indexer: Option<TickIndexer>,
}

impl TickScale {
    /// Creates a scale with no date enumerator, a zoom range of `0..=100`, a
    /// day factor of one and the RFC 3339 date as label.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            min_zoom: 0.0,
            max_zoom: 100.0,
            day_factor: DayFactor::Fixed(1.0),
            dates_between: None,
            label: Arc::new(|date: DateTime<Utc>| TickLabel::Text(date.to_rfc3339())),
            indexer: None,
        }
    }

    /// Built-in scale for a calendar unit, identified by the unit's id and
    /// gated by [`TickUnit::default_zoom_range`].
    #[must_use]
    pub fn for_unit(unit: TickUnit) -> Self {
        let day_factor = match unit {
            TickUnit::Year | TickUnit::Month => {
                DayFactor::PerDate(Arc::new(move |date| unit.days_at(date)))
            }
            _ => DayFactor::Fixed(unit.days_at(DateTime::<Utc>::UNIX_EPOCH)),
        };
        let (min_zoom, max_zoom) = unit.default_zoom_range();

        Self::new(unit.id())
            .with_zoom_range(min_zoom, max_zoom)
            .with_day_factor(day_factor)
            .with_dates_between(move |start, end| unit.dates_between(start, end))
            .with_label(move |date| TickLabel::Number(unit.label(date)))
            .with_indexer(move |date| unit.index(date))
    }

    #[must_use]
    pub fn years() -> Self {
        Self::for_unit(TickUnit::Year)
    }

    #[must_use]
    pub fn months() -> Self {
        Self::for_unit(TickUnit::Month)
    }

    #[must_use]
    pub fn days() -> Self {
        Self::for_unit(TickUnit::Day)
    }

    #[must_use]
    pub fn hours() -> Self {
        Self::for_unit(TickUnit::Hour)
    }

    #[must_use]
    pub fn minutes() -> Self {
        Self::for_unit(TickUnit::Minute)
    }

    #[must_use]
    pub fn seconds() -> Self {
        Self::for_unit(TickUnit::Second)
    }

    #[must_use]
    pub fn with_zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    #[must_use]
    pub fn with_day_factor(mut self, day_factor: DayFactor) -> Self {
        self.day_factor = day_factor;
        self
    }

    #[must_use]
    pub fn with_dates_between<F>(mut self, dates_between: F) -> Self
    where
        F: Fn(DateTime<Utc>, DateTime<Utc>) -> Vec<DateTime<Utc>> + Send + Sync + 'static,
    {
        self.dates_between = Some(Arc::new(dates_between));
        self
    }

    #[must_use]
    pub fn with_label<F>(mut self, label: F) -> Self
    where
        F: Fn(DateTime<Utc>) -> TickLabel + Send + Sync + 'static,
    {
        self.label = Arc::new(label);
        self
    }

    #[must_use]
    pub fn with_indexer<F>(mut self, indexer: F) -> Self
    where
        F: Fn(DateTime<Utc>) -> i64 + Send + Sync + 'static,
    {
        self.indexer = Some(Arc::new(indexer));
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    #[must_use]
    pub fn day_factor(&self) -> &DayFactor {
        &self.day_factor
    }

    #[must_use]
    pub fn has_dates_between(&self) -> bool {
        self.dates_between.is_some()
    }

    pub(crate) fn set_zoom_range(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
    }

    pub(crate) fn set_day_factor(&mut self, day_factor: DayFactor) {
        self.day_factor = day_factor;
    }

    pub(crate) fn set_dates_between(&mut self, dates_between: DateEnumerator) {
        self.dates_between = Some(dates_between);
    }

    pub(crate) fn set_label(&mut self, label: TickLabeler) {
        self.label = label;
    }

    pub(crate) fn set_indexer(&mut self, indexer: TickIndexer) {
        self.indexer = Some(indexer);
    }

    #[must_use]
    pub fn matches_zoom(&self, zoom: f64) -> bool {
        self.min_zoom <= zoom && zoom <= self.max_zoom
    }

    #[must_use]
    pub fn label_for(&self, date: DateTime<Utc>) -> TickLabel {
        (self.label)(date)
    }

    /// Enumerates the scale-aligned dates between `start` and `end`.
    ///
    /// A scale without an enumerator, or whose enumerator returns nothing for a
    /// non-empty range, is misconfigured.
    pub fn dates_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TimelineResult<Vec<DateTime<Utc>>> {
        let Some(dates_between) = &self.dates_between else {
            return Err(self.misconfigured("no date enumerator is configured"));
        };

        let dates = dates_between(start, end);
        if dates.is_empty() && start < end {
            return Err(self.misconfigured(format!(
                "date enumerator returned no dates between {start} and {end}"
            )));
        }
        Ok(dates)
    }

    /// Contiguous index of the tick starting at `date`.
    ///
    /// Without an explicit indexer, fixed-width scales count whole ticks since
    /// year zero.
    pub fn index_of(&self, date: DateTime<Utc>) -> TimelineResult<i64> {
        if let Some(indexer) = &self.indexer {
            return Ok(indexer(date));
        }
        match self.day_factor {
            DayFactor::Fixed(days) => Ok((days_since_year_zero(date) / days).round() as i64),
            DayFactor::PerDate(_) => Err(self.misconfigured(
                "scales with a per-date day factor require an explicit indexer",
            )),
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.id.is_empty() {
            return Err(TimelineError::InvalidData(
                "tick scale id must not be empty".to_owned(),
            ));
        }
        if self.min_zoom.is_nan() || self.max_zoom.is_nan() || self.min_zoom > self.max_zoom {
            return Err(self.misconfigured(format!(
                "zoom range {}..={} must be ordered",
                self.min_zoom, self.max_zoom
            )));
        }
        if let DayFactor::Fixed(days) = self.day_factor {
            if !days.is_finite() || days <= 0.0 {
                return Err(self.misconfigured("fixed day factor must be finite and > 0"));
            }
        }
        Ok(())
    }

    pub(crate) fn misconfigured(&self, reason: impl Into<String>) -> TimelineError {
        TimelineError::InvalidTickScale {
            scale_id: self.id.clone(),
            reason: reason.into(),
        }
    }
}

impl fmt::Debug for TickScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickScale")
            .field("id", &self.id)
            .field("min_zoom", &self.min_zoom)
            .field("max_zoom", &self.max_zoom)
            .field("day_factor", &self.day_factor)
            .field("has_dates_between", &self.dates_between.is_some())
            .field("has_indexer", &self.indexer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{DayFactor, TickLabel, TickScale};
    use crate::core::primitives::civil_date;
    use crate::error::TimelineError;

    #[test]
    fn scale_without_enumerator_reports_itself() {
        let scale = TickScale::new("decades");
        let start = civil_date(2000, 1, 1).expect("start");
        let end = civil_date(2030, 1, 1).expect("end");
        let err = scale.dates_between(start, end).expect_err("must fail");
        assert!(matches!(
            err,
            TimelineError::InvalidTickScale { ref scale_id, .. } if scale_id == "decades"
        ));
    }

    #[test]
    fn empty_enumeration_for_populated_range_is_an_error() {
        let scale = TickScale::new("never").with_dates_between(|_, _| Vec::new());
        let start = civil_date(2000, 1, 1).expect("start");
        let end = civil_date(2001, 1, 1).expect("end");
        assert!(scale.dates_between(start, end).is_err());
        assert!(scale.dates_between(start, start).expect("degenerate").is_empty());
    }

    #[test]
    fn default_indexer_counts_fixed_ticks() {
        let scale = TickScale::new("weeks").with_day_factor(DayFactor::Fixed(7.0));
        let date = civil_date(0, 1, 15).expect("date");
        assert_eq!(scale.index_of(date).expect("index"), 2);

        let per_date = TickScale::new("custom")
            .with_day_factor(DayFactor::PerDate(std::sync::Arc::new(|_| 3.0)));
        assert!(per_date.index_of(date).is_err());
    }

    #[test]
    fn validation_rejects_inverted_zoom_range_and_bad_factor() {
        assert!(TickScale::days().with_zoom_range(5.0, 1.0).validate().is_err());
        assert!(
            TickScale::new("x")
                .with_day_factor(DayFactor::Fixed(0.0))
                .validate()
                .is_err()
        );
        assert!(TickScale::new("").validate().is_err());
        assert!(TickScale::months().validate().is_ok());
    }

    #[test]
    fn presets_label_with_calendar_components() {
        let date = civil_date(1987, 6, 21).expect("date");
        assert_eq!(TickScale::years().label_for(date), TickLabel::Number(1987));
        assert_eq!(TickScale::months().label_for(date), TickLabel::Number(6));
        assert_eq!(TickScale::days().label_for(date).to_string(), "21");
    }
}
