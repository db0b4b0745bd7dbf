//! Transport and calibration settings.

use joystick_core::{CalibrationState, JoystickReader, LineSource};
use serialport::SerialPort;

use crate::error::Result;
use crate::input::{PortOpener, SerialLineSource};

/// Device node the reference board enumerates as.
pub const DEFAULT_PORT: &str = "/dev/tty.usbmodemfd121";

/// Line rate the reference firmware transmits at.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// A reader bound to an opened serial device.
pub type SerialJoystick = JoystickReader<SerialLineSource<Box<dyn SerialPort>>>;

/// Where the joystick is attached and the baud rate the port is opened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    pub port: String,
    pub baud_rate: u32,
}

impl SerialConfig {
    #[must_use]
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }

    #[must_use]
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

/// Everything needed to construct a [`SerialJoystick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoystickConfig {
    pub serial: SerialConfig,
    pub calibration: CalibrationState,
}

impl JoystickConfig {
    /// Open the configured port and attach a reader to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortUnavailable`](crate::Error::PortUnavailable)
    /// if the device cannot be opened.
    pub fn open(&self) -> Result<SerialJoystick> {
        let source = SerialLineSource::open(&self.serial)?;
        Ok(self.attach(source))
    }

    /// Open the port through `opener` and attach a reader to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortUnavailable`](crate::Error::PortUnavailable)
    /// if the opener fails.
    pub fn open_with<O: PortOpener>(
        &self,
        opener: &O,
    ) -> Result<JoystickReader<SerialLineSource<O::Port>>> {
        let source = SerialLineSource::open_with(&self.serial, opener)?;
        Ok(self.attach(source))
    }

    fn attach<S: LineSource>(&self, source: S) -> JoystickReader<S> {
        JoystickReader::with_calibration(source, self.calibration)
    }
}
