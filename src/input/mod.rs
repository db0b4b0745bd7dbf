//! Line source implementations for host transports.

mod serial;

pub use serial::{PortOpener, SerialLineSource, SystemPorts, READ_TIMEOUT};
