//! Host-side reader for the serial joystick.
//!
//! Opens the joystick's serial device, reads its telemetry lines and turns
//! them into [`InterpretedState`] values through [`joystick_core`].
//!
//! # Example
//!
//! ```no_run
//! use serial_joystick::{JoystickConfig, SerialConfig};
//!
//! let config = JoystickConfig {
//!     serial: SerialConfig::new("/dev/ttyACM0"),
//!     ..JoystickConfig::default()
//! };
//! let mut joystick = config.open()?;
//! joystick.calibrate(Some(126), None);
//! let state = joystick.read_state()?;
//! println!("{state}");
//! # Ok::<(), serial_joystick::Error>(())
//! ```
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`joystick_core`] that callers
//! need, so consumers only depend on this crate.

pub mod config;
pub mod error;
pub mod input;
pub mod monitor;

// Re-export core types for convenience
pub use joystick_core::{
    decode, interpret, CalibrationState, DecodeError, Direction, FrameFault, InterpretError,
    InterpretedState, JoystickReader, LineBuffer, LineSource, RawFrame, ReadError,
    TransportError, MAX_LINE_LENGTH,
};

pub use config::{JoystickConfig, SerialConfig, SerialJoystick, DEFAULT_BAUD_RATE, DEFAULT_PORT};
pub use error::{Error, Result};
pub use input::{PortOpener, SerialLineSource, SystemPorts};
pub use monitor::zero_on_first_frame;
