//! Hysteretic classification of echo durations
//!
//! Two thresholds are used instead of one so that a target hovering around a single boundary
//! does not make the detector chatter. Which threshold applies depends on the current state:
//!
//! | `is_present` | polarity          | checking long | flips on               |
//! |--------------|-------------------|---------------|------------------------|
//! | true         | `LongIsPresent`   | no            | `d <= short_threshold` |
//! | false        | `LongIsPresent`   | yes           | `d >= long_threshold`  |
//! | true         | `ShortIsPresent`  | yes           | `d >= long_threshold`  |
//! | false        | `ShortIsPresent`  | no            | `d <= short_threshold` |
//!
//! Readings strictly between the thresholds never support a flip.

use crate::units::EchoDuration;

/// How echo length maps to presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// A long echo (nothing close to the sensor) means present,
    /// e.g. a sensor looking at a parked car that leaves
    LongIsPresent,
    /// A short echo (something close to the sensor) means present,
    /// e.g. a sensor pointed at a doorway or a chair
    ShortIsPresent,
}

impl Polarity {
    pub fn from_long_is_present(long_is_present: bool) -> Self {
        if long_is_present {
            Polarity::LongIsPresent
        } else {
            Polarity::ShortIsPresent
        }
    }

    pub fn long_is_present(self) -> bool {
        self == Polarity::LongIsPresent
    }

    /// Whether a flip away from `is_present` has to be confirmed by a long reading
    ///
    /// If the current state is not the one associated with long echoes, leaving it means
    /// seeing long echoes; otherwise it means seeing short ones.
    pub fn checking_long(self, is_present: bool) -> bool {
        is_present != self.long_is_present()
    }
}

/// Pair of thresholds plus the polarity that selects between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hysteresis {
    polarity: Polarity,
    long_threshold: EchoDuration,
    short_threshold: EchoDuration,
}

impl Hysteresis {
    /// Thresholds are expected to satisfy `short_threshold <= long_threshold`,
    /// which [`DetectorConfigBuilder::build`](crate::DetectorConfigBuilder::build) enforces.
    pub const fn new(polarity: Polarity, long_threshold: EchoDuration, short_threshold: EchoDuration) -> Self {
        Self {
            polarity,
            long_threshold,
            short_threshold,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn long_threshold(&self) -> EchoDuration {
        self.long_threshold
    }

    pub fn short_threshold(&self) -> EchoDuration {
        self.short_threshold
    }

    /// Does `duration` argue for leaving the state `is_present`?
    ///
    /// Both boundaries are inclusive in the supporting direction.
    pub fn supports_flip(&self, is_present: bool, duration: EchoDuration) -> bool {
        if self.polarity.checking_long(is_present) {
            duration >= self.long_threshold
        } else {
            duration <= self.short_threshold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LONG: EchoDuration = EchoDuration(10656);
    const SHORT: EchoDuration = EchoDuration(7104);

    #[test]
    fn test_checking_long_truth_table() {
        assert!(!Polarity::LongIsPresent.checking_long(true));
        assert!(Polarity::LongIsPresent.checking_long(false));
        assert!(Polarity::ShortIsPresent.checking_long(true));
        assert!(!Polarity::ShortIsPresent.checking_long(false));
    }

    #[test]
    fn test_polarity_from_flag() {
        assert_eq!(Polarity::from_long_is_present(true), Polarity::LongIsPresent);
        assert_eq!(Polarity::from_long_is_present(false), Polarity::ShortIsPresent);
        assert!(Polarity::LongIsPresent.long_is_present());
        assert!(!Polarity::ShortIsPresent.long_is_present());
    }

    #[test]
    fn test_short_is_present_enter() {
        let h = Hysteresis::new(Polarity::ShortIsPresent, LONG, SHORT);
        // not present, waiting for something to come close
        assert!(h.supports_flip(false, EchoDuration(6000)));
        assert!(h.supports_flip(false, SHORT));
        assert!(!h.supports_flip(false, EchoDuration(7105)));
        assert!(!h.supports_flip(false, LONG));
        assert!(!h.supports_flip(false, EchoDuration(20000)));
    }

    #[test]
    fn test_short_is_present_leave() {
        let h = Hysteresis::new(Polarity::ShortIsPresent, LONG, SHORT);
        // present, waiting for the target to move away
        assert!(h.supports_flip(true, EchoDuration(20000)));
        assert!(h.supports_flip(true, LONG));
        assert!(!h.supports_flip(true, EchoDuration(10655)));
        assert!(!h.supports_flip(true, SHORT));
        assert!(!h.supports_flip(true, EchoDuration(100)));
    }

    #[test]
    fn test_long_is_present() {
        let h = Hysteresis::new(Polarity::LongIsPresent, LONG, SHORT);
        assert!(h.supports_flip(false, LONG));
        assert!(!h.supports_flip(false, SHORT));
        assert!(h.supports_flip(true, SHORT));
        assert!(!h.supports_flip(true, LONG));
    }

    proptest! {
        #[test]
        fn dead_band_never_supports_flip(
            d in (SHORT.0 + 1)..LONG.0,
            is_present in any::<bool>(),
            long_is_present in any::<bool>(),
        ) {
            let h = Hysteresis::new(Polarity::from_long_is_present(long_is_present), LONG, SHORT);
            prop_assert!(!h.supports_flip(is_present, EchoDuration(d)));
        }

        #[test]
        fn supports_flip_matches_definition(
            d in any::<u32>(),
            is_present in any::<bool>(),
            long_is_present in any::<bool>(),
        ) {
            let h = Hysteresis::new(Polarity::from_long_is_present(long_is_present), LONG, SHORT);
            let checking_long = is_present != long_is_present;
            let expected = (checking_long && d >= LONG.0) || (!checking_long && d <= SHORT.0);
            prop_assert_eq!(h.supports_flip(is_present, EchoDuration(d)), expected);
        }
    }
}
