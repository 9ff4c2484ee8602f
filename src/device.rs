//! Pollable devices
//!
//! A [`Device`] is anything a [`Scheduler`](crate::Scheduler) can drive: it gets initialised once,
//! updated on every pass of the control loop, and refreshed now and then so that a downstream
//! consumer stays in sync even if it missed a report.

use crate::config::{ConfigError, DetectorConfig};
use crate::detector::PresenceDetector;
use crate::event::PresenceEvent;
use crate::traits::{Clock, Notifier, RangeSensor};

/// Every presence device name starts with this
pub const NAME_PREFIX: &str = "presence";

/// Common interface of everything the scheduler polls
pub trait Device {
    fn name(&self) -> &str;

    /// Called once before the first update
    fn init(&mut self);

    /// Called on every pass of the control loop
    fn update(&mut self);

    /// Re-send the current state without sampling anything
    fn refresh(&mut self);
}

/// Presence sensor backed by an ultrasonic range finder
///
/// Owns its sensor, clock and notifier, so the same type works with real hardware
/// and with fakes in tests.
pub struct UltrasonicPresence<S, C, N> {
    name: &'static str,
    sensor: S,
    clock: C,
    notifier: N,
    detector: PresenceDetector,
}

impl<S, C, N> UltrasonicPresence<S, C, N>
where
    S: RangeSensor,
    C: Clock,
    N: Notifier,
{
    /// Create the device. The sensor is not read until [`Device::init`].
    ///
    /// Fails if `name` does not start with `presence`.
    pub fn new(
        name: &'static str,
        sensor: S,
        clock: C,
        notifier: N,
        config: DetectorConfig,
        initial_state: bool,
    ) -> Result<Self, ConfigError> {
        if !name.starts_with(NAME_PREFIX) {
            return Err(ConfigError::InvalidName);
        }

        Ok(Self {
            name,
            sensor,
            clock,
            notifier,
            detector: PresenceDetector::new(config, initial_state),
        })
    }

    pub fn detector(&self) -> &PresenceDetector {
        &self.detector
    }

    pub fn is_present(&self) -> bool {
        self.detector.is_present()
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn poll(&mut self) {
        if let Some(event) = self.detector.poll(&self.clock, &mut self.sensor) {
            info!("{} now {}", self.name, event.label());
            self.send(event);
        }
    }

    fn send(&mut self, event: PresenceEvent) {
        self.notifier.notify(self.name, event);
    }
}

impl<S, C, N> Device for UltrasonicPresence<S, C, N>
where
    S: RangeSensor,
    C: Clock,
    N: Notifier,
{
    fn name(&self) -> &str {
        self.name
    }

    fn init(&mut self) {
        self.poll();
    }

    fn update(&mut self) {
        self.poll();
    }

    fn refresh(&mut self) {
        let event = self.detector.refresh();
        self.send(event);
    }
}
