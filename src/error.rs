use std::io;

use joystick_core::ReadError;

/// Errors surfaced by the host-side reader.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured serial device could not be opened.
    #[error("couldn't connect on {port}, try a different port")]
    PortUnavailable {
        port: String,
        #[source]
        source: io::Error,
    },
    /// A read, decode, or interpret step failed for one line.
    #[error(transparent)]
    Read(#[from] ReadError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use joystick_core::{DecodeError, FrameFault};

    #[test]
    fn test_port_unavailable_message() {
        let err = Error::PortUnavailable {
            port: "/dev/ttyACM9".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(
            err.to_string(),
            "couldn't connect on /dev/ttyACM9, try a different port"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_read_error_is_transparent() {
        let err = Error::from(ReadError::Decode(DecodeError::MalformedFrame(
            FrameFault::MissingHeader,
        )));
        assert_eq!(err.to_string(), "malformed frame: MissingHeader");
    }
}
