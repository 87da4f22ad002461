use crate::error::{TimelineError, TimelineResult};
use crate::interaction::KeyboardAcceleration;

use super::TimelineEngineConfig;

pub(super) fn validate_base_tick_size(base_tick_size: f64) -> TimelineResult<f64> {
    if !base_tick_size.is_finite() || base_tick_size <= 0.0 {
        return Err(TimelineError::InvalidData(
            "base tick size must be finite and > 0".to_owned(),
        ));
    }
    Ok(base_tick_size)
}

pub(super) fn validate_zoom_delta_factor(zoom_delta_factor: f64) -> TimelineResult<f64> {
    if !zoom_delta_factor.is_finite() || zoom_delta_factor <= 1.0 {
        return Err(TimelineError::InvalidData(
            "zoom delta factor must be finite and > 1".to_owned(),
        ));
    }
    Ok(zoom_delta_factor)
}

pub(super) fn validate_virtualization_buffer(buffer: f64) -> TimelineResult<f64> {
    if !buffer.is_finite() || buffer < 0.0 {
        return Err(TimelineError::InvalidData(
            "virtualization buffer must be finite and >= 0".to_owned(),
        ));
    }
    Ok(buffer)
}

pub(super) fn validate_move_amount(move_amount: f64) -> TimelineResult<f64> {
    if !move_amount.is_finite() {
        return Err(TimelineError::InvalidData(
            "move amount must be finite".to_owned(),
        ));
    }
    Ok(move_amount)
}

pub(super) fn validate_keyboard_acceleration(
    acceleration: KeyboardAcceleration,
) -> TimelineResult<KeyboardAcceleration> {
    for (name, multiplier) in [
        ("alt", acceleration.alt),
        ("ctrl", acceleration.ctrl),
        ("shift", acceleration.shift),
    ] {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "keyboard acceleration `{name}` must be finite and > 0"
            )));
        }
    }
    Ok(acceleration)
}

pub(super) fn validate_engine_config(config: TimelineEngineConfig) -> TimelineResult<()> {
    if !config.zoom_level.is_finite() {
        return Err(TimelineError::InvalidData(
            "zoom level must be finite".to_owned(),
        ));
    }
    if !config.view_center.is_finite() {
        return Err(TimelineError::InvalidData(
            "view center must be finite".to_owned(),
        ));
    }
    validate_base_tick_size(config.base_tick_size)?;
    validate_zoom_delta_factor(config.zoom_delta_factor)?;
    validate_virtualization_buffer(config.virtualization_buffer)?;
    validate_move_amount(config.move_amount)?;
    validate_keyboard_acceleration(config.keyboard_acceleration)?;
    Ok(())
}
