//! Driver library for a serial-attached two-channel olfactory display.
//!
//! The device is a scent-emission controller with two independently
//! switchable emitter outputs. Each channel-select update is transmitted as
//! a short ASCII frame: a reset command followed by one enable command per
//! active channel. See [`protocol`] for the wire format and
//! [`driver::ScentDriver`] for the connection lifecycle and transmission
//! operations.

pub mod config;
pub mod driver;
pub mod error;
pub mod ports;
pub mod protocol;
pub mod tracing;
pub mod transport;
pub mod types;

pub use driver::ScentDriver;
pub use error::{Error, Result};
pub use types::{Channel, Intensity};
