use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::location::date_to_position;
use crate::error::{TimelineError, TimelineResult};

/// Width (in pixels) of one day at a zoom level.
///
/// `zoom_level` is an exponent: every unit multiplies the day width by
/// `zoom_delta_factor`.
#[must_use]
pub fn day_width(base_tick_size: f64, zoom_delta_factor: f64, zoom_level: f64) -> f64 {
    base_tick_size * zoom_delta_factor.powf(zoom_level)
}

/// Pan/zoom state of the timeline.
///
/// Neither the zoom level nor the view center is bounded. The view center is
/// the timeline position at the horizontal center of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Camera {
    zoom_level: f64,
    view_center: f64,
}

impl Camera {
    pub fn new(zoom_level: f64, view_center: f64) -> TimelineResult<Self> {
        ensure_finite(zoom_level, "camera zoom level")?;
        ensure_finite(view_center, "camera view center")?;
        Ok(Self {
            zoom_level,
            view_center,
        })
    }

    #[must_use]
    pub fn zoom_level(self) -> f64 {
        self.zoom_level
    }

    #[must_use]
    pub fn view_center(self) -> f64 {
        self.view_center
    }

    #[must_use]
    pub fn day_width(self, base_tick_size: f64, zoom_delta_factor: f64) -> f64 {
        day_width(base_tick_size, zoom_delta_factor, self.zoom_level)
    }

    /// Pans the view center by `amount` pixels.
    pub fn move_by(&mut self, amount: f64) -> TimelineResult<()> {
        ensure_finite(amount, "move amount")?;
        self.view_center += amount;
        Ok(())
    }

    pub fn move_to_position(&mut self, position: f64) -> TimelineResult<()> {
        ensure_finite(position, "move target position")?;
        self.view_center = position;
        Ok(())
    }

    /// Centers the view on `date` using the current day width.
    pub fn move_to_date(&mut self, date: DateTime<Utc>, day_width: f64) -> TimelineResult<()> {
        self.move_to_position(date_to_position(day_width, date))
    }

    pub fn zoom_by(&mut self, amount: f64) -> TimelineResult<()> {
        ensure_finite(amount, "zoom amount")?;
        self.zoom_level += amount;
        Ok(())
    }

    /// Zooms by `amount` while keeping `position` at the same screen offset.
    ///
    /// The distance between the focal position and the view center is kept,
    /// and the focal pixel moves to where the zoomed drawing puts it. Zoom level
    /// and view center change together so no caller sees a mixed state.
    pub fn zoom_on_position(
        &mut self,
        position: f64,
        amount: f64,
        zoom_delta_factor: f64,
    ) -> TimelineResult<()> {
        ensure_finite(position, "zoom focal position")?;
        ensure_finite(amount, "zoom amount")?;
        if !zoom_delta_factor.is_finite() || zoom_delta_factor <= 1.0 {
            return Err(TimelineError::InvalidData(
                "zoom delta factor must be finite and > 1".to_owned(),
            ));
        }

        let view_center = zoomed_view_center(self.view_center, position, amount, zoom_delta_factor);
        if !view_center.is_finite() {
            return Err(TimelineError::InvalidData(
                "zoom produced a non-finite view center".to_owned(),
            ));
        }

        self.zoom_level += amount;
        self.view_center = view_center;
        Ok(())
    }

    pub fn zoom_on_date(
        &mut self,
        date: DateTime<Utc>,
        amount: f64,
        day_width: f64,
        zoom_delta_factor: f64,
    ) -> TimelineResult<()> {
        self.zoom_on_position(date_to_position(day_width, date), amount, zoom_delta_factor)
    }
}

/// Zoom factor applied to every position for a zoom delta of `amount`.
///
/// Zooming in grows positions by `zoom_delta_factor` per unit, zooming out
/// shrinks them by its inverse.
#[must_use]
pub fn zoom_factor(amount: f64, zoom_delta_factor: f64) -> f64 {
    let factor = if amount < 0.0 {
        1.0 / zoom_delta_factor
    } else {
        zoom_delta_factor
    };
    factor.powf(amount.abs())
}

fn zoomed_view_center(view_center: f64, position: f64, amount: f64, zoom_delta_factor: f64) -> f64 {
    let distance_to_center = position - view_center;
    let zoomed_position = position * zoom_factor(amount, zoom_delta_factor);
    zoomed_position - distance_to_center
}

fn ensure_finite(value: f64, what: &str) -> TimelineResult<()> {
    if !value.is_finite() {
        return Err(TimelineError::InvalidData(format!("{what} must be finite")));
    }
    Ok(())
}
