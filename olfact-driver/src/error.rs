//! Common error types for olfact-driver.
//!
//! This module provides a centralized Error enum using thiserror, with
//! conversions from the underlying transport error types.

use thiserror::Error;

/// Main error type for driver operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The named port could not be claimed at open time
    #[error("Serial port {port} unavailable: {source}")]
    PortUnavailable {
        port: String,
        #[source]
        source: serialport::Error,
    },

    /// A transmission was attempted without an open connection
    #[error("Olfactory port not ready")]
    PortNotReady,

    /// A frame write exceeded the port timeout; the frame was dropped
    #[error("Write timed out, frame dropped")]
    WriteTimeout,

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serial port errors
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
