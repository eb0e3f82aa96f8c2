//! Driver for the olfactory display device.
//!
//! [`ScentDriver`] owns the serial link and translates channel-select
//! requests into wire frames. The lifecycle is explicit: the owning
//! application calls [`ScentDriver::open`] at startup and
//! [`ScentDriver::close`] at shutdown, and event handlers call the
//! remaining operations in between. All operations are synchronous and run
//! to completion on the caller's thread.

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::protocol;
use crate::transport::{Link, SerialLink};
use crate::types::{Channel, Intensity};

/// Driver for a two-channel scent-emission controller.
///
/// The driver is either closed (no link) or open (link present);
/// transmission is only attempted while open. One driver value owns at most
/// one link, and nothing else may write to that port. Not safe for
/// concurrent callers; a multi-threaded host must wrap the driver in its
/// own lock.
pub struct ScentDriver<L = SerialLink> {
    link: Option<L>,
    intensity: [Intensity; 2],
    selection: Option<(bool, bool)>,
}

impl ScentDriver<SerialLink> {
    /// Create a closed driver with both channels at full strength.
    pub fn new() -> Self {
        Self::closed()
    }

    /// Open the serial connection to the controller.
    ///
    /// No-op when already open. Fails with [`Error::PortUnavailable`] when
    /// the named port cannot be claimed.
    pub fn open(&mut self, port_name: &str, baud_rate: u32) -> Result<()> {
        if self.link.is_some() {
            debug!(port_name, "already open, ignoring");
            return Ok(());
        }
        let link = SerialLink::open(port_name, baud_rate)?;
        debug!(port_name, baud_rate, "olfactory port opened");
        self.link = Some(link);
        Ok(())
    }
}

impl Default for ScentDriver<SerialLink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Link> ScentDriver<L> {
    fn closed() -> Self {
        Self {
            link: None,
            intensity: [Intensity::default(); 2],
            selection: None,
        }
    }

    /// Release the serial connection.
    ///
    /// Safe in any state, including when the driver was never opened;
    /// afterwards the driver is closed and the remembered selection is
    /// gone.
    pub fn close(&mut self) {
        if self.link.take().is_some() {
            debug!("olfactory port closed");
        }
        self.selection = None;
    }

    /// True while the serial connection is open.
    pub fn is_open(&self) -> bool {
        self.link.is_some()
    }

    /// Store a new strength for `channel`.
    ///
    /// The raw slider level is rounded and clamped into 1..=10. Nothing is
    /// transmitted; the stored value applies from the next
    /// [`select_channels`](Self::select_channels) call.
    pub fn set_intensity(&mut self, channel: Channel, level: f32) {
        let intensity = Intensity::from_level(level);
        trace!(%channel, level, stored = intensity.as_level(), "intensity updated");
        self.intensity[channel.index()] = intensity;
    }

    /// Current strength of `channel`.
    pub fn intensity(&self, channel: Channel) -> Intensity {
        self.intensity[channel.index()]
    }

    /// Last selection transmitted to the device, if any.
    pub fn selection(&self) -> Option<(bool, bool)> {
        self.selection
    }

    /// Transmit a channel selection: reset all channels, then enable the
    /// requested ones at their stored strengths.
    ///
    /// Fire-and-forget: one frame, no retry, no queueing. Without an open
    /// connection the update is dropped and [`Error::PortNotReady`]
    /// returned; a timed-out write is dropped and surfaced as
    /// [`Error::WriteTimeout`].
    pub fn select_channels(&mut self, channel1: bool, channel2: bool) -> Result<()> {
        let Some(link) = self.link.as_mut() else {
            warn!("olfactory port not ready, dropping channel selection");
            return Err(Error::PortNotReady);
        };

        let frame = protocol::select_frame(channel1, channel2, self.intensity);
        match link.send(&frame) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                warn!("write timed out, channel selection dropped");
                return Err(Error::WriteTimeout);
            }
            Err(e) => return Err(e.into()),
        }

        // The controller sends nothing on its own, but line noise still
        // lands in the OS receive buffer; empty it after each frame.
        if let Err(e) = link.drain_input() {
            debug!("failed to drain receive buffer: {e}");
        }

        self.selection = Some((channel1, channel2));
        trace!(channel1, channel2, ?frame, "selection transmitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Default)]
    struct RecordingLink {
        frames: Vec<Vec<u8>>,
        fail_with: Option<io::ErrorKind>,
        drains: usize,
    }

    impl Link for RecordingLink {
        fn send(&mut self, frame: &[u8]) -> io::Result<()> {
            if let Some(kind) = self.fail_with {
                return Err(io::Error::new(kind, "injected failure"));
            }
            self.frames.push(frame.to_vec());
            Ok(())
        }

        fn drain_input(&mut self) -> io::Result<()> {
            self.drains += 1;
            Ok(())
        }
    }

    fn open_driver() -> ScentDriver<RecordingLink> {
        let mut driver = ScentDriver::<RecordingLink>::closed();
        driver.link = Some(RecordingLink::default());
        driver
    }

    fn frames(driver: &ScentDriver<RecordingLink>) -> &[Vec<u8>] {
        &driver.link.as_ref().unwrap().frames
    }

    #[test]
    fn empty_selection_writes_only_reset() {
        let mut driver = open_driver();
        driver.select_channels(false, false).unwrap();
        assert_eq!(frames(&driver), [b"0".to_vec()]);
    }

    #[test]
    fn full_selection_writes_reset_then_both_channels() {
        let mut driver = open_driver();
        driver.set_intensity(Channel::One, 5.6);
        driver.set_intensity(Channel::Two, 1.0);
        driver.select_channels(true, true).unwrap();
        assert_eq!(frames(&driver), [b"0F1A2".to_vec()]);
    }

    #[test]
    fn intensities_default_to_full_strength() {
        let mut driver = open_driver();
        driver.select_channels(true, false).unwrap();
        assert_eq!(frames(&driver), [b"0J1".to_vec()]);
    }

    #[test]
    fn intensity_applies_on_next_selection_only() {
        let mut driver = open_driver();
        driver.select_channels(true, false).unwrap();
        driver.set_intensity(Channel::One, 2.0);
        driver.select_channels(true, false).unwrap();
        assert_eq!(frames(&driver), [b"0J1".to_vec(), b"0B1".to_vec()]);
    }

    #[test]
    fn selection_while_closed_reports_port_not_ready() {
        let mut driver = ScentDriver::<RecordingLink>::closed();
        let result = driver.select_channels(true, true);
        assert!(matches!(result, Err(Error::PortNotReady)));
        assert!(driver.selection().is_none());
    }

    #[test]
    fn close_is_safe_in_any_state() {
        let mut driver = ScentDriver::<RecordingLink>::closed();
        driver.close();
        driver.close();
        assert!(!driver.is_open());

        let mut driver = open_driver();
        driver.select_channels(true, false).unwrap();
        driver.close();
        driver.close();
        assert!(!driver.is_open());
        assert!(driver.selection().is_none());
    }

    #[test]
    fn selection_after_close_reports_port_not_ready() {
        let mut driver = open_driver();
        driver.select_channels(false, true).unwrap();
        driver.close();
        let result = driver.select_channels(false, true);
        assert!(matches!(result, Err(Error::PortNotReady)));
    }

    #[test]
    fn timed_out_write_is_dropped_not_retried() {
        let mut driver = open_driver();
        driver.link.as_mut().unwrap().fail_with = Some(io::ErrorKind::TimedOut);
        let result = driver.select_channels(true, true);
        assert!(matches!(result, Err(Error::WriteTimeout)));
        assert!(driver.selection().is_none());
        assert_eq!(driver.link.as_ref().unwrap().frames.len(), 0);

        // The next selection goes out normally.
        driver.link.as_mut().unwrap().fail_with = None;
        driver.select_channels(true, true).unwrap();
        assert_eq!(frames(&driver).len(), 1);
    }

    #[test]
    fn other_write_errors_surface_as_io() {
        let mut driver = open_driver();
        driver.link.as_mut().unwrap().fail_with = Some(io::ErrorKind::BrokenPipe);
        let result = driver.select_channels(false, false);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn selection_state_tracks_last_transmission() {
        let mut driver = open_driver();
        assert_eq!(driver.selection(), None);
        driver.select_channels(true, false).unwrap();
        assert_eq!(driver.selection(), Some((true, false)));
        driver.select_channels(false, false).unwrap();
        assert_eq!(driver.selection(), Some((false, false)));
    }

    #[test]
    fn receive_buffer_is_drained_after_each_frame() {
        let mut driver = open_driver();
        driver.select_channels(true, true).unwrap();
        driver.select_channels(false, false).unwrap();
        assert_eq!(driver.link.as_ref().unwrap().drains, 2);
    }

    #[test]
    fn stored_intensity_is_queryable() {
        let mut driver = ScentDriver::<RecordingLink>::closed();
        driver.set_intensity(Channel::Two, 0.2);
        assert_eq!(driver.intensity(Channel::Two), Intensity::MIN);
        assert_eq!(driver.intensity(Channel::One), Intensity::MAX);
    }
}
