//! Typed values shared across the driver.

pub mod channel;
pub mod intensity;

pub use channel::Channel;
pub use intensity::Intensity;
