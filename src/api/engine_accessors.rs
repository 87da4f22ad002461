use chrono::{DateTime, Utc};

use crate::core::{Camera, TickItem, TickScale, ViewBounds, Viewport, location};
use crate::interaction::InteractionState;
use crate::render::{ReconcileStats, RenderedTick, ViewHost};

use super::{TimelineEngine, TimelineEngineConfig};

impl<H: ViewHost> TimelineEngine<H> {
    /// Current configuration, with the live camera state folded in.
    #[must_use]
    pub fn config(&self) -> TimelineEngineConfig {
        TimelineEngineConfig {
            zoom_level: self.core.camera.zoom_level(),
            view_center: self.core.camera.view_center(),
            ..self.core.config
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.config.viewport
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.core.camera.zoom_level()
    }

    #[must_use]
    pub fn view_center(&self) -> f64 {
        self.core.camera.view_center()
    }

    /// Pixels one day occupies at the current zoom level.
    #[must_use]
    pub fn day_width(&self) -> f64 {
        self.core.camera.day_width(
            self.core.config.base_tick_size,
            self.core.config.zoom_delta_factor,
        )
    }

    #[must_use]
    pub fn view_bounds(&self) -> ViewBounds {
        ViewBounds::new(
            self.core.config.viewport,
            self.core.camera.zoom_level(),
            self.core.camera.view_center(),
        )
    }

    /// Date under the horizontal center of the viewport.
    #[must_use]
    pub fn center_date(&self) -> DateTime<Utc> {
        location::position_to_date(self.day_width(), self.core.camera.view_center())
    }

    #[must_use]
    pub fn svg_view_box(&self) -> String {
        self.view_bounds().to_svg_view_box()
    }

    #[must_use]
    pub fn position_to_date(&self, position: f64) -> DateTime<Utc> {
        location::position_to_date(self.day_width(), position)
    }

    #[must_use]
    pub fn date_to_position(&self, date: DateTime<Utc>) -> f64 {
        location::date_to_position(self.day_width(), date)
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.core.interaction
    }

    #[must_use]
    pub fn tick_scale_count(&self) -> usize {
        self.core.scales.len()
    }

    /// Registered scale ids in registration order.
    #[must_use]
    pub fn tick_scale_ids(&self) -> Vec<&str> {
        self.core.scales.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn tick_scale(&self, scale_id: &str) -> Option<&TickScale> {
        self.core.scales.get(scale_id).map(|slot| &slot.scale)
    }

    /// Whether the scale's zoom range contained the zoom level at the last pass.
    #[must_use]
    pub fn should_render(&self, scale_id: &str) -> Option<bool> {
        self.core.scales.get(scale_id).map(|slot| slot.should_render)
    }

    #[must_use]
    pub fn rendered_ticks(&self, scale_id: &str) -> Option<&[RenderedTick<H::Handle>]> {
        self.core
            .scales
            .get(scale_id)
            .map(|slot| slot.recycler.views())
    }

    /// Items backing the rendered views of a scale, ascending by index.
    #[must_use]
    pub fn rendered_items(&self, scale_id: &str) -> Vec<TickItem> {
        self.core
            .scales
            .get(scale_id)
            .map(|slot| slot.recycler.items().cloned().collect())
            .unwrap_or_default()
    }

    /// Configuration error reported by the scale's last pass, if any.
    #[must_use]
    pub fn tick_scale_error(&self, scale_id: &str) -> Option<&str> {
        self.core
            .scales
            .get(scale_id)
            .and_then(|slot| slot.last_error.as_deref())
    }

    #[must_use]
    pub fn last_reconcile_stats(&self, scale_id: &str) -> Option<ReconcileStats> {
        self.core.scales.get(scale_id).map(|slot| slot.last_stats)
    }
}
