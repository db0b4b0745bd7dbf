//! Helpers shared by the monitor binary.

use joystick_core::{JoystickReader, LineSource, RawFrame, ReadError, TransportError};
use log::{info, warn};

use crate::error::Result;

/// Calibrate both axes to the first frame that decodes.
///
/// Lines that fail to decode are logged and skipped. Returns the frame the
/// axes were zeroed at, or `None` if the source disconnected first.
///
/// # Errors
///
/// Returns [`Error::Read`](crate::Error::Read) on a transport I/O failure.
pub fn zero_on_first_frame<S: LineSource>(
    reader: &mut JoystickReader<S>,
) -> Result<Option<RawFrame>> {
    loop {
        match reader.read_frame() {
            Ok(frame) => {
                reader.calibrate(Some(frame.raw_y), Some(frame.raw_x));
                info!("zeroed at x={} y={}", frame.raw_x, frame.raw_y);
                return Ok(Some(frame));
            }
            Err(ReadError::Transport(TransportError::Disconnected)) => {
                info!("device disconnected before a valid frame arrived");
                return Ok(None);
            }
            Err(e @ ReadError::Transport(TransportError::Io)) => return Err(e.into()),
            Err(e) => warn!("skipping line: {e}"),
        }
    }
}
