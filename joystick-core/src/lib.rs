//! Platform-agnostic joystick telemetry decoding, calibration, and interpretation.
//!
//! This crate provides the core of the serial joystick reader without
//! any platform-specific dependencies. It can be used both in embedded
//! `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`types`]: Core data structures ([`RawFrame`], [`Direction`], [`InterpretedState`])
//! - [`parser`]: Line protocol decoding ([`decode`])
//! - [`calibration`]: Axis zero points ([`CalibrationState`])
//! - [`interpreter`]: Calibrated direction and step derivation ([`interpret`])
//! - [`input`]: Line source trait ([`LineSource`])
//! - [`reader`]: Ties a line source to the decode/interpret steps ([`JoystickReader`])
//!
//! # Protocol
//!
//! ```text
//! 0 <button> <raw_y> <raw_x>\n
//! ```
//!
//! Button code `1` means pressed, `2` released. Axis readings are raw
//! integers, nominally 1-250, with the stick at rest near the zero points.
//!
//! # Example
//!
//! ```rust
//! use joystick_core::{decode, interpret, CalibrationState, Direction};
//!
//! let mut calib = CalibrationState::default();
//! let frame = decode(b"0 1 137 133\n").unwrap();
//!
//! let state = interpret(&frame, &calib).unwrap();
//! assert_eq!(state.y_direction, Some(Direction::Up));
//!
//! // Move the Y zero point and the same frame reads as centered
//! calib.update(None, Some(137));
//! assert!(interpret(&frame, &calib).unwrap().is_centered());
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.
//!
//! # Concurrency
//!
//! Nothing here locks. A [`JoystickReader`] owns its calibration; callers
//! sharing one across threads must provide their own exclusion.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod calibration;
pub mod input;
pub mod interpreter;
pub mod parser;
pub mod reader;
pub mod types;

// Re-export main types at crate root
pub use calibration::{CalibrationState, DEFAULT_X_ZERO, DEFAULT_Y_ZERO};
pub use input::{LineBuffer, LineSource, TransportError};
pub use interpreter::{interpret, InterpretError, DEAD_ZONE, STEP_SIZE};
pub use parser::{decode, DecodeError, FrameFault, FIELD_COUNT, FRAME_HEADER, MAX_LINE_LENGTH};
pub use reader::{JoystickReader, ReadError};
pub use types::{Direction, InterpretedState, RawFrame, BUTTON_PRESSED, BUTTON_RELEASED};
