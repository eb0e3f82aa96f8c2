//! Serial port enumeration for diagnostics.

use crate::error::Result;

/// List the system-visible serial port names.
///
/// Pure query for diagnostic display; the ports are not probed or claimed.
pub fn list_available_ports() -> Result<Vec<String>> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}
