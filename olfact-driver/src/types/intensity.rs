//! Intensity type for per-channel emission strength.

/// Emission strength for one scent channel.
///
/// The controller accepts ten strength levels. Callers hand in raw slider
/// values as floats; construction rounds and clamps, so every `Intensity`
/// that exists has a wire encoding.
///
/// The hardware powers up at full strength, so `Default` yields level 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intensity(u8);

impl Intensity {
    /// Lowest emission strength.
    pub const MIN: Intensity = Intensity(1);

    /// Highest emission strength.
    pub const MAX: Intensity = Intensity(10);

    /// Create an intensity from a raw slider level.
    ///
    /// The level is rounded to the nearest integer and clamped into
    /// [`MIN`](Self::MIN)..=[`MAX`](Self::MAX). NaN clamps to the minimum.
    pub fn from_level(level: f32) -> Self {
        let rounded = level.round();
        if rounded >= 10.0 {
            Self::MAX
        } else if rounded >= 1.0 {
            Self(rounded as u8)
        } else {
            Self::MIN
        }
    }

    /// Get the strength as an integer level in 1..=10.
    pub const fn as_level(&self) -> u8 {
        self.0
    }

    /// Get the strength as an emission percentage (level 10 = 100%).
    pub const fn as_percent(&self) -> u8 {
        self.0 * 10
    }

    /// Wire letter for this strength: 'A' for level 1 through 'J' for
    /// level 10.
    pub const fn wire_letter(&self) -> u8 {
        b'A' + self.0 - 1
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::MAX
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}
