use tracing::trace;

use crate::error::TimelineResult;
use crate::interaction::{CameraMotion, KeyInput, KeyboardAcceleration, WheelInput};
use crate::render::ViewHost;

use super::camera_motion_resolver::{resolve_key_motion, resolve_wheel_pan, resolve_wheel_zoom};
use super::interaction_validation::validate_wheel_input;
use super::validation::validate_keyboard_acceleration;
use super::{InputSource, InteractionInputBehavior, TimelineEngine};

impl<H: ViewHost> TimelineEngine<H> {
    #[must_use]
    pub fn interaction_input_behavior(&self) -> InteractionInputBehavior {
        self.core.config.interaction_input_behavior
    }

    pub fn set_interaction_input_behavior(&mut self, behavior: InteractionInputBehavior) {
        self.core.config.interaction_input_behavior = behavior;
    }

    #[must_use]
    pub fn keyboard_acceleration(&self) -> KeyboardAcceleration {
        self.core.config.keyboard_acceleration
    }

    pub fn set_keyboard_acceleration(
        &mut self,
        acceleration: KeyboardAcceleration,
    ) -> TimelineResult<()> {
        self.core.config.keyboard_acceleration = validate_keyboard_acceleration(acceleration)?;
        Ok(())
    }

    /// Translates a wheel event into camera calls.
    ///
    /// Vertical delta zooms around the pointer and horizontal delta pans; one
    /// event may do both. Returns whether any motion was applied.
    pub fn handle_wheel(&mut self, input: WheelInput) -> TimelineResult<bool> {
        let input = validate_wheel_input(input)?;
        let acceleration = self.core.config.keyboard_acceleration;

        let zoom = resolve_wheel_zoom(input, self.view_bounds(), acceleration);
        let pan = resolve_wheel_pan(input, self.core.config.move_amount, acceleration);

        let mut applied = false;
        for motion in [zoom, pan].into_iter().flatten() {
            applied |= self.dispatch_motion(InputSource::Wheel, motion)?;
        }
        Ok(applied)
    }

    /// Translates an arrow key press into a camera call.
    ///
    /// Returns whether a motion was applied.
    pub fn handle_key(&mut self, input: KeyInput) -> TimelineResult<bool> {
        let Some(motion) = resolve_key_motion(
            input,
            self.view_bounds(),
            self.core.config.move_amount,
            self.core.config.keyboard_acceleration,
        ) else {
            return Ok(false);
        };
        self.dispatch_motion(InputSource::Keyboard, motion)
    }

    /// Applies a resolved motion, bypassing input gates.
    pub fn apply_camera_motion(&mut self, motion: CameraMotion) -> TimelineResult<()> {
        match motion {
            CameraMotion::Move { amount } => self.move_by(amount),
            CameraMotion::ZoomOn { position, amount } => self.zoom_on_position(position, amount),
        }
    }

    fn dispatch_motion(
        &mut self,
        source: InputSource,
        motion: CameraMotion,
    ) -> TimelineResult<bool> {
        let intent = motion.intent();
        if !self
            .core
            .config
            .interaction_input_behavior
            .allows(source, intent)
        {
            trace!(?source, ?intent, "input ignored");
            self.core.interaction.record_ignored(intent);
            return Ok(false);
        }

        self.apply_camera_motion(motion)?;
        self.core.interaction.record_handled(intent);
        Ok(true)
    }
}
