use chrono::{DateTime, Utc};
use tracing::trace;

use crate::core::{Camera, location};
use crate::error::TimelineResult;
use crate::render::ViewHost;

use super::TimelineEngine;

impl<H: ViewHost> TimelineEngine<H> {
    /// Pans the view center by `amount` pixels. Positive pans towards later dates.
    pub fn move_by(&mut self, amount: f64) -> TimelineResult<()> {
        self.update_camera(|camera, _, _| camera.move_by(amount))
    }

    /// Centers the view on a timeline position.
    pub fn move_to_position(&mut self, position: f64) -> TimelineResult<()> {
        self.update_camera(|camera, _, _| camera.move_to_position(position))
    }

    /// Centers the view on a date.
    pub fn move_to_date(&mut self, date: DateTime<Utc>) -> TimelineResult<()> {
        self.update_camera(|camera, day_width, _| camera.move_to_date(date, day_width))
    }

    /// Changes the zoom level without adjusting the view center.
    ///
    /// Positions scale with the day width, so the date under the viewport
    /// center drifts. Use [`TimelineEngine::zoom_on_position`] to keep a
    /// point fixed.
    pub fn zoom_by(&mut self, amount: f64) -> TimelineResult<()> {
        self.update_camera(|camera, _, _| camera.zoom_by(amount))
    }

    /// Zooms by `amount` while keeping `position` at the same screen pixel.
    pub fn zoom_on_position(&mut self, position: f64, amount: f64) -> TimelineResult<()> {
        self.update_camera(|camera, _, zoom_delta_factor| {
            camera.zoom_on_position(position, amount, zoom_delta_factor)
        })
    }

    /// Zooms by `amount` while keeping `date` at the same screen pixel.
    pub fn zoom_on_date(&mut self, date: DateTime<Utc>, amount: f64) -> TimelineResult<()> {
        self.update_camera(|camera, day_width, zoom_delta_factor| {
            camera.zoom_on_date(date, amount, day_width, zoom_delta_factor)
        })
    }

    /// Zooms around the pixel `offset_x` from the viewport's left edge.
    pub fn zoom_on_screen_offset(&mut self, offset_x: f64, amount: f64) -> TimelineResult<()> {
        let position = location::screen_to_position(offset_x, self.view_bounds());
        self.zoom_on_position(position, amount)
    }

    /// Replaces zoom level and view center together.
    pub fn set_camera(&mut self, zoom_level: f64, view_center: f64) -> TimelineResult<()> {
        let camera = Camera::new(zoom_level, view_center)?;
        self.update_camera(|current, _, _| {
            *current = camera;
            Ok(())
        })
    }

    /// Applies `apply` to a copy of the camera and commits it only on success.
    ///
    /// The closure receives the current day width and zoom delta factor.
    fn update_camera<F>(&mut self, apply: F) -> TimelineResult<()>
    where
        F: FnOnce(&mut Camera, f64, f64) -> TimelineResult<()>,
    {
        let day_width = self.day_width();
        let mut camera = self.core.camera;
        apply(&mut camera, day_width, self.core.config.zoom_delta_factor)?;

        if camera == self.core.camera {
            return Ok(());
        }
        trace!(
            zoom_level = camera.zoom_level(),
            view_center = camera.view_center(),
            "camera changed"
        );
        self.core.camera = camera;
        self.invalidate_camera();
        Ok(())
    }
}
