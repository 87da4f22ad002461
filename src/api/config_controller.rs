use tracing::debug;

use crate::core::{Camera, Viewport};
use crate::error::TimelineResult;
use crate::render::ViewHost;

use super::validation::{
    validate_base_tick_size, validate_engine_config, validate_move_amount,
    validate_virtualization_buffer, validate_zoom_delta_factor,
};
use super::{InvalidationTopic, TimelineEngine, TimelineEngineConfig};

impl<H: ViewHost> TimelineEngine<H> {
    /// Updates viewport dimensions reported by the host's layout.
    ///
    /// A zero size is valid and suspends virtualization until a real size
    /// arrives.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.core.config.viewport == viewport {
            return;
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "viewport resized"
        );
        self.core.config.viewport = viewport;
        self.invalidate_full(InvalidationTopic::Viewport);
    }

    pub fn set_base_tick_size(&mut self, base_tick_size: f64) -> TimelineResult<()> {
        let base_tick_size = validate_base_tick_size(base_tick_size)?;
        if self.core.config.base_tick_size != base_tick_size {
            debug!(base_tick_size, "base tick size changed");
            self.core.config.base_tick_size = base_tick_size;
            self.invalidate_full(InvalidationTopic::Config);
        }
        Ok(())
    }

    pub fn set_zoom_delta_factor(&mut self, zoom_delta_factor: f64) -> TimelineResult<()> {
        let zoom_delta_factor = validate_zoom_delta_factor(zoom_delta_factor)?;
        if self.core.config.zoom_delta_factor != zoom_delta_factor {
            debug!(zoom_delta_factor, "zoom delta factor changed");
            self.core.config.zoom_delta_factor = zoom_delta_factor;
            self.invalidate_full(InvalidationTopic::Config);
        }
        Ok(())
    }

    pub fn set_virtualization_buffer(&mut self, buffer: f64) -> TimelineResult<()> {
        let buffer = validate_virtualization_buffer(buffer)?;
        if self.core.config.virtualization_buffer != buffer {
            debug!(buffer, "virtualization buffer changed");
            self.core.config.virtualization_buffer = buffer;
            self.invalidate_full(InvalidationTopic::Config);
        }
        Ok(())
    }

    /// Pan distance per wheel notch or arrow key. Takes effect on the next
    /// input event; nothing is recomputed.
    pub fn set_move_amount(&mut self, move_amount: f64) -> TimelineResult<()> {
        self.core.config.move_amount = validate_move_amount(move_amount)?;
        Ok(())
    }

    /// Replaces the whole configuration, including the camera.
    ///
    /// Registered tick scales and their rendered views are kept.
    pub fn apply_config(&mut self, config: TimelineEngineConfig) -> TimelineResult<()> {
        validate_engine_config(config)?;
        let camera = Camera::new(config.zoom_level, config.view_center)?;

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            zoom_level = config.zoom_level,
            view_center = config.view_center,
            "timeline config applied"
        );
        self.core.config = config;
        self.core.camera = camera;
        self.invalidate_full(InvalidationTopic::Config);
        Ok(())
    }
}
