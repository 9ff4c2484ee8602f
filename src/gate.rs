//! Sampling gate
//!
//! Rate limits an action to at most once per interval on a wrapping millisecond clock.
//! Any backwards step of the clock (overflow or reset) counts as due, otherwise a wrapped
//! counter would stall the gate for the next ~49 days.

use crate::units::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplingGate {
    interval: Millis,
    previous: Millis,
}

impl SamplingGate {
    /// New gate whose previous mark is the power-up time (0)
    pub const fn new(interval: Millis) -> Self {
        Self {
            interval,
            previous: Millis::ZERO,
        }
    }

    pub fn interval(&self) -> Millis {
        self.interval
    }

    /// Time of the last mark
    pub fn previous(&self) -> Millis {
        self.previous
    }

    /// Due if the clock went backwards, or at least one interval has passed
    pub fn is_due(&self, now: Millis) -> bool {
        match now.since(self.previous) {
            None => true,
            Some(elapsed) => elapsed >= self.interval.as_u32(),
        }
    }

    /// Record that the gated action happened at `at`
    pub fn mark(&mut self, at: Millis) {
        self.previous = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_not_due_within_interval() {
        let mut gate = SamplingGate::new(Millis(1000));
        gate.mark(Millis(5000));
        assert!(!gate.is_due(Millis(5000)));
        assert!(!gate.is_due(Millis(5999)));
    }

    #[test]
    fn test_due_at_interval() {
        let mut gate = SamplingGate::new(Millis(1000));
        gate.mark(Millis(5000));
        assert!(gate.is_due(Millis(6000)));
        assert!(gate.is_due(Millis(60000)));
    }

    #[test]
    fn test_due_after_wrap() {
        let mut gate = SamplingGate::new(Millis(1000));
        gate.mark(Millis(u32::MAX - 10));
        // only a few ms really passed, but the counter wrapped
        assert!(gate.is_due(Millis(3)));
    }

    #[test]
    fn test_initial_previous_is_zero() {
        let gate = SamplingGate::new(Millis(1000));
        assert_eq!(gate.previous(), Millis::ZERO);
        assert!(!gate.is_due(Millis(999)));
        assert!(gate.is_due(Millis(1000)));
    }

    #[test]
    fn test_zero_interval_always_due() {
        let mut gate = SamplingGate::new(Millis(0));
        gate.mark(Millis(42));
        assert!(gate.is_due(Millis(42)));
    }

    proptest! {
        #[test]
        fn due_iff_backwards_or_elapsed(now in any::<u32>(), previous in any::<u32>(), interval in any::<u32>()) {
            let mut gate = SamplingGate::new(Millis(interval));
            gate.mark(Millis(previous));
            let expected = now < previous || now - previous >= interval;
            prop_assert_eq!(gate.is_due(Millis(now)), expected);
        }
    }
}
