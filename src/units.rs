//! Time and echo units
//!
//! - [`Millis`]: a wrapping 32-bit millisecond counter, as provided by a microcontroller clock
//! - [`EchoDuration`]: the width of an HC-SR04 echo pulse in microseconds
//!
//! # Converting distances
//! The echo travels to the target and back, so the pulse width is proportional to twice the distance.
//! The HC-SR04 datasheet gives the usual rule of thumb:
//! ```text
//! time (µs) = distance (cm) * 58
//! time (µs) = distance (in) * 148
//! ```

use core::fmt;

/// Microseconds of echo per centimetre of distance
const MICROS_PER_CENTIMETER: u32 = 58;

/// Microseconds of echo per inch of distance
const MICROS_PER_INCH: u32 = 148;

/// Millisecond timestamp from a free-running 32-bit counter
///
/// The counter overflows after roughly 49.7 days, so comparisons must tolerate wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Counter value at power-up
    pub const ZERO: Millis = Millis(0);

    pub const fn new(millis: u32) -> Self {
        Self(millis)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`
    ///
    /// Returns `None` if the counter went backwards (wrapped or was reset) since `earlier`.
    pub fn since(self, earlier: Millis) -> Option<u32> {
        self.0.checked_sub(earlier.0)
    }
}

impl From<u32> for Millis {
    fn from(millis: u32) -> Self {
        Self(millis)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Width of an echo pulse in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EchoDuration(pub u32);

impl EchoDuration {
    /// Reported by a sensor when no echo arrived before its timeout.
    /// Always larger than any sensible `max_valid_reading`.
    pub const NO_ECHO: EchoDuration = EchoDuration(u32::MAX);

    pub const fn from_micros(micros: u32) -> Self {
        Self(micros)
    }

    /// Echo expected for a target `cm` centimetres away
    pub const fn from_centimeters(cm: u32) -> Self {
        Self(cm.saturating_mul(MICROS_PER_CENTIMETER))
    }

    /// Echo expected for a target `inches` away
    pub const fn from_inches(inches: u32) -> Self {
        Self(inches.saturating_mul(MICROS_PER_INCH))
    }

    pub const fn as_micros(self) -> u32 {
        self.0
    }

    /// Approximate target distance in whole centimetres
    pub const fn as_centimeters(self) -> u32 {
        self.0 / MICROS_PER_CENTIMETER
    }
}

impl From<u32> for EchoDuration {
    fn from(micros: u32) -> Self {
        Self(micros)
    }
}

impl fmt::Display for EchoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since_forward() {
        assert_eq!(Millis(1500).since(Millis(500)), Some(1000));
        assert_eq!(Millis(500).since(Millis(500)), Some(0));
    }

    #[test]
    fn test_since_after_wrap() {
        // counter wrapped from near u32::MAX back to a small value
        assert_eq!(Millis(10).since(Millis(u32::MAX - 5)), None);
    }

    #[test]
    fn test_distance_conversions() {
        // 6 feet and 4 feet, the usual doorway thresholds
        assert_eq!(EchoDuration::from_inches(6 * 12), EchoDuration(10656));
        assert_eq!(EchoDuration::from_inches(4 * 12), EchoDuration(7104));
        // 400cm is the HC-SR04's rated range
        assert_eq!(EchoDuration::from_centimeters(400), EchoDuration(23200));
        assert_eq!(EchoDuration(23200).as_centimeters(), 400);
    }

    #[test]
    fn test_no_echo_saturates() {
        assert_eq!(EchoDuration::from_centimeters(u32::MAX), EchoDuration::NO_ECHO);
    }
}
