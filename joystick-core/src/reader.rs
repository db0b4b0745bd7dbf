//! JoystickReader: reads lines from a source and interprets them.

use crate::calibration::CalibrationState;
use crate::input::{LineBuffer, LineSource, TransportError};
use crate::interpreter::{interpret, InterpretError};
use crate::parser::{decode, DecodeError};
use crate::types::{InterpretedState, RawFrame};

/// Reads telemetry lines from a [`LineSource`] and turns them into
/// [`InterpretedState`] values using the reader's own calibration.
///
/// Every call is independent: a bad line is reported once to the caller
/// and the next call simply reads the next line.
///
/// # Example
///
/// ```
/// use joystick_core::{JoystickReader, LineBuffer, LineSource, TransportError};
///
/// struct OneLine(Option<&'static str>);
///
/// impl LineSource for OneLine {
///     fn read_line(&mut self, buf: &mut LineBuffer) -> Result<(), TransportError> {
///         let line = self.0.take().ok_or(TransportError::Disconnected)?;
///         buf.clear();
///         buf.extend_from_slice(line.as_bytes())
///             .map_err(|_| TransportError::LineTooLong)
///     }
///
///     fn is_connected(&self) -> bool {
///         self.0.is_some()
///     }
/// }
///
/// let mut reader = JoystickReader::new(OneLine(Some("0 1 137 133")));
/// let state = reader.read_state().unwrap();
/// assert!(state.button_pressed);
/// assert_eq!(state.y_steps, 1);
/// ```
pub struct JoystickReader<S> {
    source: S,
    calibration: CalibrationState,
    buffer: LineBuffer,
}

impl<S: LineSource> JoystickReader<S> {
    /// Create a reader with the default zero points.
    pub fn new(source: S) -> Self {
        Self::with_calibration(source, CalibrationState::default())
    }

    /// Create a reader with explicit zero points.
    pub fn with_calibration(source: S, calibration: CalibrationState) -> Self {
        Self {
            source,
            calibration,
            buffer: LineBuffer::new(),
        }
    }

    /// Read one line and decode it into a raw frame.
    pub fn read_frame(&mut self) -> Result<RawFrame, ReadError> {
        self.source.read_line(&mut self.buffer)?;
        Ok(decode(&self.buffer)?)
    }

    /// Interpret a frame against the current calibration.
    pub fn interpret(&self, frame: &RawFrame) -> Result<InterpretedState, InterpretError> {
        interpret(frame, &self.calibration)
    }

    /// Read, decode and interpret the next line.
    pub fn read_state(&mut self) -> Result<InterpretedState, ReadError> {
        let frame = self.read_frame()?;
        Ok(self.interpret(&frame)?)
    }

    /// Move the zero points that are given; the others stay as they are.
    pub fn calibrate(&mut self, y_zero: Option<i32>, x_zero: Option<i32>) {
        self.calibration.update(x_zero, y_zero);
    }

    /// Current zero points.
    #[inline]
    #[must_use]
    pub fn calibration(&self) -> &CalibrationState {
        &self.calibration
    }

    /// Get a reference to the line source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the line source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Decompose the reader into its line source.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Error type for reader operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    /// Error from the line source.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The line is not a valid frame.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The frame carries an unusable value.
    #[error(transparent)]
    Interpret(#[from] InterpretError),
}
