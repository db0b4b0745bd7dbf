//! Turns a raw frame into button, displacement, direction and step values.
//!
//! Axis sign convention follows the wiring of the reference stick: a raw Y
//! above the zero point means [`Direction::Up`], a raw X above the zero
//! point means [`Direction::Left`].

use crate::calibration::CalibrationState;
use crate::types::{Direction, InterpretedState, RawFrame, BUTTON_PRESSED, BUTTON_RELEASED};

/// Displacements with magnitude up to this value report no direction.
pub const DEAD_ZONE: i32 = 1;

/// Raw units per step.
pub const STEP_SIZE: u32 = 10;

/// Error type for frame interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterpretError {
    /// Button code outside {1, 2}.
    #[error("invalid button code {0}")]
    InvalidButtonCode(i32),
}

/// Interpret a decoded frame against the given calibration.
///
/// A [`RawFrame`] always carries exactly three fields, so the only check
/// left here is the button code.
///
/// # Example
///
/// ```
/// use joystick_core::{interpret, CalibrationState, Direction, RawFrame};
///
/// let state = interpret(&RawFrame::new(1, 137, 133), &CalibrationState::default()).unwrap();
/// assert!(state.button_pressed);
/// assert_eq!(state.y_value, 10);
/// assert_eq!(state.y_direction, Some(Direction::Up));
/// assert_eq!(state.y_steps, 1);
/// assert_eq!(state.x_direction, None);
/// ```
pub fn interpret(
    frame: &RawFrame,
    calib: &CalibrationState,
) -> Result<InterpretedState, InterpretError> {
    let button_pressed = match frame.button_code {
        BUTTON_PRESSED => true,
        BUTTON_RELEASED => false,
        code => return Err(InterpretError::InvalidButtonCode(code)),
    };

    let y = frame.raw_y.saturating_sub(calib.y_zero);
    let x = frame.raw_x.saturating_sub(calib.x_zero);

    Ok(InterpretedState {
        button_pressed,
        y_value: y,
        y_direction: direction(y, Direction::Up, Direction::Down),
        y_steps: steps(y),
        x_value: x,
        x_direction: direction(x, Direction::Left, Direction::Right),
        x_steps: steps(x),
    })
}

#[inline]
fn direction(value: i32, positive: Direction, negative: Direction) -> Option<Direction> {
    if value > DEAD_ZONE {
        Some(positive)
    } else if value < -DEAD_ZONE {
        Some(negative)
    } else {
        None
    }
}

/// `round(|value| / STEP_SIZE)`, ties to even.
#[inline]
fn steps(value: i32) -> i32 {
    let magnitude = value.unsigned_abs();
    let quotient = magnitude / STEP_SIZE;
    let remainder = magnitude % STEP_SIZE;
    let half = STEP_SIZE / 2;
    let rounded = if remainder > half || (remainder == half && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    // At most u32::MAX / 10 + 1, which fits
    i32::try_from(rounded).unwrap_or(i32::MAX)
}
