//! Core joystick types: RawFrame, Direction, InterpretedState.

use core::fmt;

/// Button code the device sends while the stick button is held down.
pub const BUTTON_PRESSED: i32 = 1;

/// Button code the device sends while the stick button is up.
pub const BUTTON_RELEASED: i32 = 2;

/// One structurally valid telemetry line, before calibration.
///
/// Field order follows the wire order: `0 <button> <raw_y> <raw_x>`.
/// The button code is not range-checked here; that happens during
/// interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame {
    pub button_code: i32,
    pub raw_y: i32,
    pub raw_x: i32,
}

impl RawFrame {
    #[must_use]
    pub const fn new(button_code: i32, raw_y: i32, raw_x: i32) -> Self {
        Self {
            button_code,
            raw_y,
            raw_x,
        }
    }
}

/// Direction of stick displacement along one axis.
///
/// The Y axis only ever reports [`Direction::Up`] or [`Direction::Down`],
/// the X axis only [`Direction::Left`] or [`Direction::Right`]. Inside the
/// dead zone the axis reports no direction at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Lowercase name, as shown by the monitor.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calibrated, interpreted joystick reading.
///
/// `*_value` is the raw reading minus the axis zero point, `*_direction` is
/// `None` inside the dead zone, and `*_steps` is the coarse magnitude
/// `round(|value| / 10)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub struct InterpretedState {
    pub button_pressed: bool,
    pub y_value: i32,
    pub y_direction: Option<Direction>,
    pub y_steps: i32,
    pub x_value: i32,
    pub x_direction: Option<Direction>,
    pub x_steps: i32,
}

impl InterpretedState {
    /// Stick at rest with the button released.
    pub const fn neutral() -> Self {
        Self {
            button_pressed: false,
            y_value: 0,
            y_direction: None,
            y_steps: 0,
            x_value: 0,
            x_direction: None,
            x_steps: 0,
        }
    }

    /// True when neither axis is outside the dead zone.
    #[inline]
    #[must_use]
    pub const fn is_centered(&self) -> bool {
        self.y_direction.is_none() && self.x_direction.is_none()
    }
}

impl Default for InterpretedState {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for InterpretedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let button = if self.button_pressed {
            "pressed"
        } else {
            "released"
        };
        write!(
            f,
            "button={} y={} ({}, {} steps) x={} ({}, {} steps)",
            button,
            self.y_value,
            self.y_direction.map_or("none", Direction::as_str),
            self.y_steps,
            self.x_value,
            self.x_direction.map_or("none", Direction::as_str),
            self.x_steps,
        )
    }
}
