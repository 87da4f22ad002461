use crate::error::{TimelineError, TimelineResult};
use crate::interaction::WheelInput;

pub(super) fn validate_wheel_input(input: WheelInput) -> TimelineResult<WheelInput> {
    if !input.delta_x.is_finite() || !input.delta_y.is_finite() {
        return Err(TimelineError::InvalidData(
            "wheel deltas must be finite".to_owned(),
        ));
    }
    if !input.offset_x.is_finite() {
        return Err(TimelineError::InvalidData(
            "wheel pointer offset must be finite".to_owned(),
        ));
    }
    Ok(input)
}
