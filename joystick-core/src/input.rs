//! Line source trait and error types.

use heapless::Vec;

use crate::parser::MAX_LINE_LENGTH;

/// Buffer holding one line from the transport, without its newline.
pub type LineBuffer = Vec<u8, MAX_LINE_LENGTH>;

/// Error type for transport reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Serial/communication I/O error.
    #[error("transport I/O error")]
    Io,
    /// The stream ended (device unplugged or port closed).
    #[error("transport disconnected")]
    Disconnected,
    /// Line longer than `MAX_LINE_LENGTH`; the rest of it was discarded.
    #[error("line exceeds maximum length")]
    LineTooLong,
}

/// Blocking source of text lines from the joystick.
///
/// This trait abstracts the transport (serial port, pipe, recorded capture)
/// so the decode and interpret steps never touch it directly.
///
/// # `no_std` Compatibility
///
/// Implementations must not require heap allocation; lines are delivered
/// into a fixed-capacity [`LineBuffer`].
pub trait LineSource {
    /// Block until one full line is available and place it in `buf`.
    ///
    /// `buf` is cleared first. The trailing `\n` is not included; any
    /// other whitespace is left for the decoder to strip.
    fn read_line(&mut self, buf: &mut LineBuffer) -> Result<(), TransportError>;

    /// Check if the source is connected/ready.
    fn is_connected(&self) -> bool;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    #[inline]
    fn read_line(&mut self, buf: &mut LineBuffer) -> Result<(), TransportError> {
        (**self).read_line(buf)
    }

    #[inline]
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}
