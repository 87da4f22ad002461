use serde::{Deserialize, Serialize};

use crate::interaction::InputIntent;

fn default_true() -> bool {
    true
}

/// Input source an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSource {
    Wheel,
    Keyboard,
}

/// Host-configurable input gates.
///
/// A disabled gate drops matching events entirely; nothing is queued for
/// later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionInputBehavior {
    /// Vertical wheel delta zooms around the pointer.
    #[serde(default = "default_true")]
    pub zoom_on_wheel: bool,
    /// Horizontal wheel delta pans.
    #[serde(default = "default_true")]
    pub move_on_wheel: bool,
    /// Up/down arrows zoom around the view center.
    #[serde(default = "default_true")]
    pub zoom_on_keyboard: bool,
    /// Left/right arrows pan.
    #[serde(default = "default_true")]
    pub move_on_keyboard: bool,
}

impl Default for InteractionInputBehavior {
    fn default() -> Self {
        Self {
            zoom_on_wheel: true,
            move_on_wheel: true,
            zoom_on_keyboard: true,
            move_on_keyboard: true,
        }
    }
}

impl InteractionInputBehavior {
    /// Every gate closed.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            zoom_on_wheel: false,
            move_on_wheel: false,
            zoom_on_keyboard: false,
            move_on_keyboard: false,
        }
    }

    #[must_use]
    pub(crate) fn allows(self, source: InputSource, intent: InputIntent) -> bool {
        match (source, intent) {
            (InputSource::Wheel, InputIntent::Zoom) => self.zoom_on_wheel,
            (InputSource::Wheel, InputIntent::Pan) => self.move_on_wheel,
            (InputSource::Keyboard, InputIntent::Zoom) => self.zoom_on_keyboard,
            (InputSource::Keyboard, InputIntent::Pan) => self.move_on_keyboard,
        }
    }
}
