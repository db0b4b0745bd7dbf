//! Axis zero points.

/// Neutral raw X reading of the reference hardware.
pub const DEFAULT_X_ZERO: i32 = 133;

/// Neutral raw Y reading of the reference hardware.
pub const DEFAULT_Y_ZERO: i32 = 127;

/// Raw readings at which each axis is considered centered.
///
/// Any integer is accepted; zero points are operator-supplied and are not
/// range-checked.
///
/// # Example
///
/// ```
/// use joystick_core::CalibrationState;
///
/// let mut calib = CalibrationState::default();
/// calib.update(None, Some(126));
/// assert_eq!(calib.x_zero, 133);
/// assert_eq!(calib.y_zero, 126);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationState {
    pub x_zero: i32,
    pub y_zero: i32,
}

impl CalibrationState {
    #[must_use]
    pub const fn new(x_zero: i32, y_zero: i32) -> Self {
        Self { x_zero, y_zero }
    }

    /// Replace the zero points that are given, keeping the others.
    #[inline]
    pub fn update(&mut self, x_zero: Option<i32>, y_zero: Option<i32>) {
        if let Some(x) = x_zero {
            self.x_zero = x;
        }
        if let Some(y) = y_zero {
            self.y_zero = y;
        }
    }
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self::new(DEFAULT_X_ZERO, DEFAULT_Y_ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let calib = CalibrationState::default();
        assert_eq!(calib.x_zero, 133);
        assert_eq!(calib.y_zero, 127);
    }

    #[test]
    fn test_update_y_only() {
        let mut calib = CalibrationState::new(130, 120);
        calib.update(None, Some(100));
        assert_eq!(calib, CalibrationState::new(130, 100));
    }

    #[test]
    fn test_update_x_only() {
        let mut calib = CalibrationState::new(130, 120);
        calib.update(Some(-7), None);
        assert_eq!(calib, CalibrationState::new(-7, 120));
    }

    #[test]
    fn test_update_nothing() {
        let mut calib = CalibrationState::default();
        calib.update(None, None);
        assert_eq!(calib, CalibrationState::default());
    }

    #[test]
    fn test_update_both() {
        let mut calib = CalibrationState::default();
        calib.update(Some(1), Some(2));
        assert_eq!(calib, CalibrationState::new(1, 2));
    }
}
