//! Presence detector state machine
//!
//! One poll cycle:
//! 1. Check the sampling gate, bail out if the last measurement is too recent
//! 2. Measure, then restart the gate from the time the measurement finished
//! 3. Drop readings above the validity limit (timeouts, out of range)
//! 4. Classify the reading against the threshold for the direction being checked
//! 5. Count consecutive supporting readings, flip once enough are seen
//! 6. Report the new state if it changed

use crate::config::DetectorConfig;
use crate::debounce::{Debouncer, Step};
use crate::event::PresenceEvent;
use crate::gate::SamplingGate;
use crate::traits::{Clock, RangeSensor};
use crate::units::{EchoDuration, Millis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresenceDetector {
    config: DetectorConfig,
    gate: SamplingGate,
    debouncer: Debouncer,
    is_present: bool,
}

impl PresenceDetector {
    /// Create a detector in `initial_state`. Does not touch the sensor.
    pub fn new(config: DetectorConfig, initial_state: bool) -> Self {
        Self {
            gate: SamplingGate::new(config.sample_interval()),
            debouncer: Debouncer::new(config.required_counts()),
            config,
            is_present: initial_state,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn is_present(&self) -> bool {
        self.is_present
    }

    /// Supporting samples counted towards the next flip
    pub fn current_count(&self) -> u8 {
        self.debouncer.count()
    }

    /// Time the last measurement finished
    pub fn previous_sample_time(&self) -> Millis {
        self.gate.previous()
    }

    /// Whether a measurement would be taken at `now`
    pub fn is_due(&self, now: Millis) -> bool {
        self.gate.is_due(now)
    }

    /// Run one poll cycle
    ///
    /// Measures only if the sampling interval has passed. Returns an event if and only if
    /// the presence state changed.
    pub fn poll<S, C>(&mut self, clock: &C, sensor: &mut S) -> Option<PresenceEvent>
    where
        S: RangeSensor + ?Sized,
        C: Clock + ?Sized,
    {
        if !self.gate.is_due(clock.now()) {
            return None;
        }

        let duration = sensor.measure();
        // the measurement itself may take tens of ms, restart the interval from its end
        self.gate.mark(clock.now());

        self.process_reading(duration)
    }

    /// Classify and debounce one raw reading, bypassing the sampling gate
    pub fn process_reading(&mut self, duration: EchoDuration) -> Option<PresenceEvent> {
        if !self.config.is_valid_reading(duration) {
            trace!("discarding invalid reading {}", duration.as_micros());
            return None;
        }

        let was_present = self.is_present;
        let supports_flip = self.config.hysteresis().supports_flip(self.is_present, duration);

        match self.debouncer.step(supports_flip) {
            Step::Confirmed => {
                self.is_present = !self.is_present;
                debug!("presence changed to {}", self.is_present);
            }
            Step::Pending(count) => {
                trace!("reading {} supports flip ({}/{})", duration.as_micros(), count, self.debouncer.required());
            }
            Step::Reset => {}
        }

        (self.is_present != was_present).then(|| PresenceEvent::new(self.is_present))
    }

    /// Current state as an event, without measuring or touching the debounce run
    pub fn refresh(&self) -> PresenceEvent {
        PresenceEvent::new(self.is_present)
    }
}
