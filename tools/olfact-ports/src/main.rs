//! Diagnostic listing of system serial ports.
//!
//! Run this on the host to find the controller's port name, then hand that
//! name to the control console or the configuration file.

use anyhow::Result;
use olfact_driver::ports::list_available_ports;

fn main() -> Result<()> {
    let ports = list_available_ports()?;
    if ports.is_empty() {
        eprintln!("No serial ports found.");
    } else {
        for name in ports {
            println!("{name}");
        }
    }
    Ok(())
}
