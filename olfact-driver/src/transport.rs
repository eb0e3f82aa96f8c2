//! Serial transport behind the driver.
//!
//! The driver transmits through the [`Link`] trait so the command logic can
//! be exercised against a recording link in tests, the same way hardware
//! sits behind trait seams elsewhere in the stack. [`SerialLink`] is the
//! real implementation over a blocking serial port.

use std::io::{self, Write};
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort};

use crate::error::{Error, Result};

/// Timeout for blocking port operations.
///
/// The controller never answers, so the timeout only bounds a wedged write.
/// The serial crate applies one timeout to reads and writes alike.
pub const PORT_TIMEOUT: Duration = Duration::from_millis(15);

/// Byte sink connecting the driver to the device.
pub trait Link {
    /// Write one frame, blocking at most for the configured timeout.
    fn send(&mut self, frame: &[u8]) -> io::Result<()>;

    /// Discard whatever the device pushed back into the OS receive buffer.
    fn drain_input(&mut self) -> io::Result<()>;
}

/// A [`Link`] over a real serial port.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    /// Open `port_name` at `baud_rate`.
    ///
    /// Fails with [`Error::PortUnavailable`] when the port is missing, in
    /// use, or not accessible.
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(PORT_TIMEOUT)
            .open()
            .map_err(|source| Error::PortUnavailable {
                port: port_name.to_string(),
                source,
            })?;
        Ok(Self { port })
    }

    /// Name of the underlying port, when the OS reports one.
    pub fn name(&self) -> Option<String> {
        self.port.name()
    }
}

impl Link for SerialLink {
    fn send(&mut self, frame: &[u8]) -> io::Result<()> {
        self.port.write_all(frame)?;
        self.port.flush()
    }

    fn drain_input(&mut self) -> io::Result<()> {
        self.port.clear(ClearBuffer::Input).map_err(io::Error::from)
    }
}
