use serde::{Deserialize, Serialize};

/// Modifier keys held while an input event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// Mouse wheel event in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    /// Pointer offset from the viewport's left edge.
    pub offset_x: f64,
    #[serde(default)]
    pub modifiers: KeyModifiers,
}

impl WheelInput {
    #[must_use]
    pub fn new(delta_x: f64, delta_y: f64, offset_x: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            offset_x,
            modifiers: KeyModifiers::default(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: Key,
    #[serde(default)]
    pub modifiers: KeyModifiers,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::default(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// What an input event asks the camera to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputIntent {
    Zoom,
    Pan,
}

/// Camera call resolved from an input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraMotion {
    Move { amount: f64 },
    ZoomOn { position: f64, amount: f64 },
}

impl CameraMotion {
    #[must_use]
    pub fn intent(self) -> InputIntent {
        match self {
            Self::Move { .. } => InputIntent::Pan,
            Self::ZoomOn { .. } => InputIntent::Zoom,
        }
    }
}

/// Multipliers applied to zoom/pan amounts while modifier keys are held.
///
/// Multipliers of every held modifier are combined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyboardAcceleration {
    pub alt: f64,
    pub ctrl: f64,
    pub shift: f64,
}

impl Default for KeyboardAcceleration {
    fn default() -> Self {
        Self {
            alt: 0.5,
            ctrl: 1.5,
            shift: 2.0,
        }
    }
}

impl KeyboardAcceleration {
    #[must_use]
    pub fn apply(self, amount: f64, modifiers: KeyModifiers) -> f64 {
        let mut amount = amount;
        if modifiers.alt {
            amount *= self.alt;
        }
        if modifiers.ctrl {
            amount *= self.ctrl;
        }
        if modifiers.shift {
            amount *= self.shift;
        }
        amount
    }
}

/// Counters of input events per intent, exposed for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InteractionState {
    zoom_handled: u64,
    pan_handled: u64,
    zoom_ignored: u64,
    pan_ignored: u64,
}

impl InteractionState {
    pub fn record_handled(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::Zoom => self.zoom_handled += 1,
            InputIntent::Pan => self.pan_handled += 1,
        }
    }

    /// Records an event dropped because its intent is disabled.
    pub fn record_ignored(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::Zoom => self.zoom_ignored += 1,
            InputIntent::Pan => self.pan_ignored += 1,
        }
    }

    #[must_use]
    pub fn handled(self, intent: InputIntent) -> u64 {
        match intent {
            InputIntent::Zoom => self.zoom_handled,
            InputIntent::Pan => self.pan_handled,
        }
    }

    #[must_use]
    pub fn ignored(self, intent: InputIntent) -> u64 {
        match intent {
            InputIntent::Zoom => self.zoom_ignored,
            InputIntent::Pan => self.pan_ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyModifiers, KeyboardAcceleration};

    #[test]
    fn acceleration_layers_multiplicatively() {
        let acceleration = KeyboardAcceleration::default();
        let all = KeyModifiers {
            ctrl: true,
            alt: true,
            shift: true,
        };
        assert_eq!(acceleration.apply(2.0, KeyModifiers::default()), 2.0);
        assert_eq!(acceleration.apply(2.0, all), 2.0 * 0.5 * 1.5 * 2.0);
        assert_eq!(
            acceleration.apply(
                1.0,
                KeyModifiers {
                    shift: true,
                    ..KeyModifiers::default()
                }
            ),
            2.0
        );
    }
}
