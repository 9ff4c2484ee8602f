//! Run-length debouncer
//!
//! Counts consecutive samples that support leaving the current state. A single
//! non-supporting sample breaks the run and the count starts over from zero.

/// What a single sample did to the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Supporting sample, but not enough of them yet
    Pending(u8),
    /// Enough supporting samples in a row, the state must flip
    Confirmed,
    /// Non-supporting sample, run reset
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    required: u8,
    count: u8,
}

impl Debouncer {
    /// `required` is at least 1 for any validated configuration
    pub const fn new(required: u8) -> Self {
        Self { required, count: 0 }
    }

    pub fn required(&self) -> u8 {
        self.required
    }

    /// Supporting samples seen in the current run
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Feed one classified sample
    pub fn step(&mut self, supports_flip: bool) -> Step {
        if !supports_flip {
            self.count = 0;
            return Step::Reset;
        }

        self.count = self.count.saturating_add(1);
        if self.count >= self.required {
            self.count = 0;
            Step::Confirmed
        } else {
            Step::Pending(self.count)
        }
    }
}
