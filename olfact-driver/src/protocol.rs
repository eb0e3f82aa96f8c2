//! Wire protocol for the olfactory display controller.
//!
//! The controller speaks short ASCII commands over the serial line:
//!
//! - `'0'` disables all channels;
//! - `<letter><digit>` enables one channel, where the letter `'A'..='J'`
//!   selects the emission strength (level 1..=10) and the digit `'1'` or
//!   `'2'` selects the channel.
//!
//! One channel-select update is one frame: the reset command first, then an
//! enable command per active channel, channel 1 before channel 2. The
//! controller never answers; transmission is fire-and-forget.

use bytes::{BufMut, BytesMut};

use crate::types::{Channel, Intensity};

/// A single controller command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Disable all channels.
    Reset,
    /// Enable one channel at the given strength.
    Enable {
        channel: Channel,
        intensity: Intensity,
    },
}

impl Command {
    /// Append this command's wire bytes to a frame buffer.
    pub fn encode_into(&self, frame: &mut BytesMut) {
        match self {
            Command::Reset => frame.put_u8(b'0'),
            Command::Enable { channel, intensity } => {
                frame.put_u8(intensity.wire_letter());
                frame.put_u8(channel.wire_digit());
            }
        }
    }
}

/// Assemble the frame for one channel-select update.
///
/// Order is fixed: reset, then channel 1 if enabled, then channel 2 if
/// enabled. Intensities are indexed by channel.
pub fn select_frame(channel1: bool, channel2: bool, intensity: [Intensity; 2]) -> BytesMut {
    // Worst case: reset plus two enable commands.
    let mut frame = BytesMut::with_capacity(5);
    Command::Reset.encode_into(&mut frame);
    if channel1 {
        Command::Enable {
            channel: Channel::One,
            intensity: intensity[Channel::One.index()],
        }
        .encode_into(&mut frame);
    }
    if channel2 {
        Command::Enable {
            channel: Channel::Two,
            intensity: intensity[Channel::Two.index()],
        }
        .encode_into(&mut frame);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(command: Command) -> Vec<u8> {
        let mut frame = BytesMut::new();
        command.encode_into(&mut frame);
        frame.to_vec()
    }

    #[test]
    fn reset_is_a_single_zero_byte() {
        assert_eq!(encode(Command::Reset), b"0");
    }

    #[test]
    fn enable_encodes_letter_then_digit() {
        let weakest_ch1 = Command::Enable {
            channel: Channel::One,
            intensity: Intensity::MIN,
        };
        assert_eq!(encode(weakest_ch1), b"A1");

        let strongest_ch2 = Command::Enable {
            channel: Channel::Two,
            intensity: Intensity::MAX,
        };
        assert_eq!(encode(strongest_ch2), b"J2");
    }

    #[test]
    fn empty_selection_transmits_only_reset() {
        let frame = select_frame(false, false, [Intensity::default(); 2]);
        assert_eq!(&frame[..], b"0");
    }

    #[test]
    fn full_selection_orders_reset_ch1_ch2() {
        let intensity = [Intensity::from_level(6.0), Intensity::from_level(1.0)];
        let frame = select_frame(true, true, intensity);
        assert_eq!(&frame[..], b"0F1A2");
    }

    #[test]
    fn single_channel_frames() {
        let intensity = [Intensity::from_level(3.0), Intensity::from_level(8.0)];
        assert_eq!(&select_frame(true, false, intensity)[..], b"0C1");
        assert_eq!(&select_frame(false, true, intensity)[..], b"0H2");
    }
}
