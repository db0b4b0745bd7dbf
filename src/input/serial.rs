//! Serial-device line source.
//!
//! Reads newline-terminated telemetry from any byte stream and hands
//! complete lines to the decoder. On a real device the stream is the
//! serial port (`/dev/ttyACM0`, `/dev/tty.usbmodem*`, `COM3`) opened through
//! [`SystemPorts`] at the configured baud rate.
//!
//! # Protocol
//!
//! `0 <button> <raw_y> <raw_x>\n`
//!
//! See [`joystick_core::decode`] for the full frame layout.

use std::io::{self, BufReader, ErrorKind, Read};
use std::time::Duration;

use joystick_core::{LineBuffer, LineSource, TransportError, MAX_LINE_LENGTH};
use log::{debug, warn};
use serialport::SerialPort;

use crate::config::SerialConfig;
use crate::error::{Error, Result};

/// How long a single read waits before polling the port again.
///
/// Timeouts are retried, so a line read still blocks until data arrives.
pub const READ_TIMEOUT: Duration = Duration::from_millis(500);

/// Opens the byte stream behind a [`SerialConfig`].
pub trait PortOpener {
    type Port: Read;

    /// Open `config.port` with the configured line settings.
    fn open(&self, config: &SerialConfig) -> io::Result<Self::Port>;
}

/// Opens OS serial devices through the `serialport` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPorts;

impl PortOpener for SystemPorts {
    type Port = Box<dyn SerialPort>;

    fn open(&self, config: &SerialConfig) -> io::Result<Self::Port> {
        let port = serialport::new(config.port.as_str(), config.baud_rate)
            .timeout(READ_TIMEOUT)
            .open()?;
        Ok(port)
    }
}

/// Byte-stream line source for receiving joystick telemetry.
pub struct SerialLineSource<R> {
    reader: BufReader<R>,
    connected: bool,
}

impl SerialLineSource<Box<dyn SerialPort>> {
    /// Open the configured serial device at the configured baud rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortUnavailable`] if the device cannot be opened.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        Self::open_with(config, &SystemPorts)
    }
}

impl<R: Read> SerialLineSource<R> {
    /// Open a port through `opener`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortUnavailable`] if the opener fails.
    pub fn open_with<O>(config: &SerialConfig, opener: &O) -> Result<Self>
    where
        O: PortOpener<Port = R>,
    {
        let port = opener
            .open(config)
            .map_err(|source| Error::PortUnavailable {
                port: config.port.clone(),
                source,
            })?;
        debug!("opened {} at {} baud", config.port, config.baud_rate);
        Ok(Self::new(port))
    }

    /// Create a line source over an already opened byte stream.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            connected: true,
        }
    }

    /// Read a single byte, retrying interrupted and timed-out reads.
    fn read_byte(&mut self) -> Result<u8, TransportError> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.connected = false;
                    return Err(TransportError::Disconnected);
                }
                Ok(_) => return Ok(byte[0]),
                Err(e) if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::TimedOut) => {}
                Err(e) => {
                    warn!("serial read failed: {e}");
                    return Err(TransportError::Io);
                }
            }
        }
    }

    /// Skip bytes up to and including the next newline.
    fn discard_line(&mut self) -> Result<(), TransportError> {
        while self.read_byte()? != b'\n' {}
        Ok(())
    }
}

impl<R: Read> LineSource for SerialLineSource<R> {
    /// Read bytes until a newline is found or the buffer is full.
    ///
    /// If a line exceeds the buffer capacity, the rest of the line is
    /// discarded so the next read starts on a frame boundary. A final line
    /// without a newline is returned as-is when the stream ends.
    fn read_line(&mut self, buf: &mut LineBuffer) -> Result<(), TransportError> {
        buf.clear();

        loop {
            let byte = match self.read_byte() {
                Ok(byte) => byte,
                Err(TransportError::Disconnected) if !buf.is_empty() => return Ok(()),
                Err(e) => return Err(e),
            };

            if byte == b'\n' {
                return Ok(());
            }

            if buf.push(byte).is_err() {
                self.discard_line()?;
                warn!("discarded line longer than {MAX_LINE_LENGTH} bytes");
                return Err(TransportError::LineTooLong);
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::Cursor;

    use super::*;

    fn line(source: &mut SerialLineSource<impl Read>) -> Result<Vec<u8>, TransportError> {
        let mut buf = LineBuffer::new();
        source.read_line(&mut buf)?;
        Ok(buf.to_vec())
    }

    #[test]
    fn test_reads_lines_in_order() {
        let mut source = SerialLineSource::new(Cursor::new(b"0 1 137 133\r\n0 2 127 133\n"));
        assert_eq!(line(&mut source).unwrap(), b"0 1 137 133\r");
        assert_eq!(line(&mut source).unwrap(), b"0 2 127 133");
        assert!(source.is_connected());
        assert_eq!(line(&mut source), Err(TransportError::Disconnected));
        assert!(!source.is_connected());
    }

    #[test]
    fn test_final_line_without_newline() {
        let mut source = SerialLineSource::new(Cursor::new(b"0 2 127 133"));
        assert_eq!(line(&mut source).unwrap(), b"0 2 127 133");
        assert_eq!(line(&mut source), Err(TransportError::Disconnected));
    }

    #[test]
    fn test_overlong_line_is_skipped() {
        let mut data = vec![b'9'; MAX_LINE_LENGTH + 10];
        data.extend_from_slice(b"\n0 1 137 133\n");
        let mut source = SerialLineSource::new(Cursor::new(data));
        assert_eq!(line(&mut source), Err(TransportError::LineTooLong));
        assert_eq!(line(&mut source).unwrap(), b"0 1 137 133");
    }

    #[test]
    fn test_line_at_capacity_fits() {
        let mut data = vec![b'7'; MAX_LINE_LENGTH];
        data.push(b'\n');
        let mut source = SerialLineSource::new(Cursor::new(data));
        assert_eq!(line(&mut source).unwrap().len(), MAX_LINE_LENGTH);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "unplugged"))
        }
    }

    #[test]
    fn test_io_error() {
        let mut source = SerialLineSource::new(FailingReader);
        assert_eq!(line(&mut source), Err(TransportError::Io));
    }

    struct InterruptOnce {
        interrupted: bool,
        data: Cursor<&'static [u8]>,
    }

    impl Read for InterruptOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let mut source = SerialLineSource::new(InterruptOnce {
            interrupted: false,
            data: Cursor::new(&b"0 2 127 133\n"[..]),
        });
        assert_eq!(line(&mut source).unwrap(), b"0 2 127 133");
    }

    /// Hands out a fixed byte stream and remembers the settings it was asked for.
    struct RecordingOpener {
        requested: Cell<Option<(String, u32)>>,
        fail: bool,
    }

    impl RecordingOpener {
        fn new(fail: bool) -> Self {
            Self {
                requested: Cell::new(None),
                fail,
            }
        }
    }

    impl PortOpener for RecordingOpener {
        type Port = Cursor<&'static [u8]>;

        fn open(&self, config: &SerialConfig) -> io::Result<Self::Port> {
            self.requested
                .set(Some((config.port.clone(), config.baud_rate)));
            if self.fail {
                return Err(io::Error::from(ErrorKind::PermissionDenied));
            }
            Ok(Cursor::new(&b"0 1 137 133\n"[..]))
        }
    }

    #[test]
    fn test_open_passes_baud_rate() {
        let opener = RecordingOpener::new(false);
        let config = SerialConfig::new("/dev/ttyACM0").with_baud_rate(115_200);
        let mut source = SerialLineSource::open_with(&config, &opener).unwrap();
        assert_eq!(
            opener.requested.take(),
            Some(("/dev/ttyACM0".to_string(), 115_200))
        );
        assert_eq!(line(&mut source).unwrap(), b"0 1 137 133");
    }

    #[test]
    fn test_open_uses_default_baud_rate() {
        let opener = RecordingOpener::new(false);
        SerialLineSource::open_with(&SerialConfig::default(), &opener).unwrap();
        assert_eq!(opener.requested.take().map(|(_, baud)| baud), Some(9600));
    }

    #[test]
    fn test_open_failure_is_port_unavailable() {
        let opener = RecordingOpener::new(true);
        let config = SerialConfig::new("/dev/ttyUSB3");
        match SerialLineSource::open_with(&config, &opener) {
            Err(Error::PortUnavailable { port, source }) => {
                assert_eq!(port, "/dev/ttyUSB3");
                assert_eq!(source.kind(), ErrorKind::PermissionDenied);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("opener failure was swallowed"),
        }
    }

    struct TimeoutOnce {
        timed_out: bool,
        data: Cursor<&'static [u8]>,
    }

    impl Read for TimeoutOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.timed_out {
                self.timed_out = true;
                return Err(io::Error::from(ErrorKind::TimedOut));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_timed_out_read_keeps_waiting() {
        let mut source = SerialLineSource::new(TimeoutOnce {
            timed_out: false,
            data: Cursor::new(&b"0 2 127 133\n"[..]),
        });
        assert_eq!(line(&mut source).unwrap(), b"0 2 127 133");
    }
}
