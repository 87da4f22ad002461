use crate::core::{ViewBounds, location};
use crate::interaction::{CameraMotion, Key, KeyInput, KeyboardAcceleration, WheelInput};

/// Vertical wheel delta zooms around the pointer. Scrolling up (negative
/// delta) zooms in by one unit, scrolling down zooms out.
pub(super) fn resolve_wheel_zoom(
    input: WheelInput,
    bounds: ViewBounds,
    acceleration: KeyboardAcceleration,
) -> Option<CameraMotion> {
    if input.delta_y == 0.0 {
        return None;
    }
    let amount = acceleration.apply(-input.delta_y.signum(), input.modifiers);
    Some(CameraMotion::ZoomOn {
        position: location::screen_to_position(input.offset_x, bounds),
        amount,
    })
}

/// Horizontal wheel delta pans by one move amount in the delta's direction.
pub(super) fn resolve_wheel_pan(
    input: WheelInput,
    move_amount: f64,
    acceleration: KeyboardAcceleration,
) -> Option<CameraMotion> {
    if input.delta_x == 0.0 {
        return None;
    }
    let amount = acceleration.apply(input.delta_x.signum() * move_amount, input.modifiers);
    Some(CameraMotion::Move { amount })
}

/// Up/down arrows zoom around the view center; left/right arrows pan.
pub(super) fn resolve_key_motion(
    input: KeyInput,
    bounds: ViewBounds,
    move_amount: f64,
    acceleration: KeyboardAcceleration,
) -> Option<CameraMotion> {
    let motion = match input.key {
        Key::ArrowUp => CameraMotion::ZoomOn {
            position: bounds.view_center,
            amount: 1.0,
        },
        Key::ArrowDown => CameraMotion::ZoomOn {
            position: bounds.view_center,
            amount: -1.0,
        },
        Key::ArrowLeft => CameraMotion::Move {
            amount: -move_amount,
        },
        Key::ArrowRight => CameraMotion::Move {
            amount: move_amount,
        },
        Key::Other => return None,
    };
    Some(accelerate(motion, input, acceleration))
}

fn accelerate(
    motion: CameraMotion,
    input: KeyInput,
    acceleration: KeyboardAcceleration,
) -> CameraMotion {
    match motion {
        CameraMotion::Move { amount } => CameraMotion::Move {
            amount: acceleration.apply(amount, input.modifiers),
        },
        CameraMotion::ZoomOn { position, amount } => CameraMotion::ZoomOn {
            position,
            amount: acceleration.apply(amount, input.modifiers),
        },
    }
}
