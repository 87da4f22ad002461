use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::KeyboardAcceleration;

use super::InteractionInputBehavior;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist and reload a timeline setup. Every field
/// can also be changed on a running engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    /// Viewport size in pixels. `0x0` means the host has not laid out yet.
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub zoom_level: f64,
    #[serde(default)]
    pub view_center: f64,
    /// Width of one day at zoom level 0.
    #[serde(default = "default_base_tick_size")]
    pub base_tick_size: f64,
    /// Day width multiplier per zoom unit. Must be > 1.
    #[serde(default = "default_zoom_delta_factor")]
    pub zoom_delta_factor: f64,
    /// Extra virtualized width on each side, as a fraction of the viewport.
    #[serde(default = "default_virtualization_buffer")]
    pub virtualization_buffer: f64,
    /// Pixels panned per wheel notch or arrow key press.
    #[serde(default = "default_move_amount")]
    pub move_amount: f64,
    #[serde(default)]
    pub interaction_input_behavior: InteractionInputBehavior,
    #[serde(default)]
    pub keyboard_acceleration: KeyboardAcceleration,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            zoom_level: 0.0,
            view_center: 0.0,
            base_tick_size: default_base_tick_size(),
            zoom_delta_factor: default_zoom_delta_factor(),
            virtualization_buffer: default_virtualization_buffer(),
            move_amount: default_move_amount(),
            interaction_input_behavior: InteractionInputBehavior::default(),
            keyboard_acceleration: KeyboardAcceleration::default(),
        }
    }

    #[must_use]
    pub fn with_zoom_level(mut self, zoom_level: f64) -> Self {
        self.zoom_level = zoom_level;
        self
    }

    #[must_use]
    pub fn with_view_center(mut self, view_center: f64) -> Self {
        self.view_center = view_center;
        self
    }

    #[must_use]
    pub fn with_base_tick_size(mut self, base_tick_size: f64) -> Self {
        self.base_tick_size = base_tick_size;
        self
    }

    #[must_use]
    pub fn with_zoom_delta_factor(mut self, zoom_delta_factor: f64) -> Self {
        self.zoom_delta_factor = zoom_delta_factor;
        self
    }

    #[must_use]
    pub fn with_virtualization_buffer(mut self, virtualization_buffer: f64) -> Self {
        self.virtualization_buffer = virtualization_buffer;
        self
    }

    #[must_use]
    pub fn with_move_amount(mut self, move_amount: f64) -> Self {
        self.move_amount = move_amount;
        self
    }

    #[must_use]
    pub fn with_interaction_input_behavior(mut self, behavior: InteractionInputBehavior) -> Self {
        self.interaction_input_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_keyboard_acceleration(mut self, acceleration: KeyboardAcceleration) -> Self {
        self.keyboard_acceleration = acceleration;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_string(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_base_tick_size() -> f64 {
    1.0
}

fn default_zoom_delta_factor() -> f64 {
    1.06
}

fn default_virtualization_buffer() -> f64 {
    0.5
}

fn default_move_amount() -> f64 {
    3.0
}

#[cfg(test)]
mod tests {
    use super::TimelineEngineConfig;
    use crate::core::Viewport;

    #[test]
    fn json_without_optional_fields_uses_defaults() {
        let config = TimelineEngineConfig::from_json_str(
            r#"{ "viewport": { "width": 640, "height": 80 }, "zoom_level": 12.5 }"#,
        )
        .expect("parse config");

        assert_eq!(config.viewport, Viewport::new(640, 80));
        assert_eq!(config.zoom_level, 12.5);
        assert_eq!(config.base_tick_size, 1.0);
        assert_eq!(config.zoom_delta_factor, 1.06);
        assert_eq!(config.virtualization_buffer, 0.5);
        assert_eq!(config.move_amount, 3.0);
        assert!(config.interaction_input_behavior.zoom_on_keyboard);
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let config = TimelineEngineConfig::new(Viewport::new(1024, 120))
            .with_zoom_level(-3.0)
            .with_view_center(1234.5)
            .with_move_amount(10.0);
        let json = config.to_json_string().expect("serialize");
        let parsed = TimelineEngineConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let err = TimelineEngineConfig::from_json_str("{ nope").expect_err("must fail");
        assert!(err.to_string().contains("failed to parse config"));
    }
}
