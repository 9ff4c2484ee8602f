//! Device scheduler
//!
//! Owns a fixed number of devices and drives them from one control loop. Every pass updates
//! all devices; every refresh interval all devices additionally re-send their state.

use heapless::Vec;
use thiserror::Error;

use crate::device::Device;
use crate::gate::SamplingGate;
use crate::units::Millis;

/// Time between two refreshes of every device (5 minutes)
pub const DEFAULT_REFRESH_INTERVAL: Millis = Millis(5 * 60 * 1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// No room left for another device
    #[error("scheduler is full")]
    Full,
}

pub struct Scheduler<'a, const N: usize> {
    devices: Vec<&'a mut dyn Device, N>,
    refresh_gate: SamplingGate,
}

impl<'a, const N: usize> Scheduler<'a, N> {
    pub fn new() -> Self {
        Self::with_refresh_interval(DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_refresh_interval(interval: Millis) -> Self {
        Self {
            devices: Vec::new(),
            refresh_gate: SamplingGate::new(interval),
        }
    }

    /// Register a device
    pub fn add(&mut self, device: &'a mut dyn Device) -> Result<(), SchedulerError> {
        self.devices.push(device).map_err(|_| SchedulerError::Full)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn init_all(&mut self) {
        for device in self.devices.iter_mut() {
            debug!("init {}", device.name());
            device.init();
        }
    }

    pub fn update_all(&mut self) {
        for device in self.devices.iter_mut() {
            device.update();
        }
    }

    pub fn refresh_all(&mut self) {
        for device in self.devices.iter_mut() {
            device.refresh();
        }
    }

    /// One pass of the control loop at time `now`
    pub fn run(&mut self, now: Millis) {
        self.update_all();

        if self.refresh_gate.is_due(now) {
            debug!("refreshing {} devices", self.devices.len());
            self.refresh_gate.mark(now);
            self.refresh_all();
        }
    }
}

impl<const N: usize> Default for Scheduler<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        inits: usize,
        updates: usize,
        refreshes: usize,
    }

    impl Device for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn init(&mut self) {
            self.inits += 1;
        }

        fn update(&mut self) {
            self.updates += 1;
        }

        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    #[test]
    fn test_add_until_full() {
        let mut a = Probe::default();
        let mut b = Probe::default();
        let mut c = Probe::default();
        let mut scheduler: Scheduler<'_, 2> = Scheduler::new();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.add(&mut a), Ok(()));
        assert_eq!(scheduler.add(&mut b), Ok(()));
        assert_eq!(scheduler.add(&mut c), Err(SchedulerError::Full));
        assert_eq!(scheduler.len(), 2);
    }

    #[test]
    fn test_fan_out() {
        let mut a = Probe::default();
        let mut b = Probe::default();
        {
            let mut scheduler: Scheduler<'_, 4> = Scheduler::new();
            scheduler.add(&mut a).unwrap();
            scheduler.add(&mut b).unwrap();
            scheduler.init_all();
            scheduler.update_all();
            scheduler.update_all();
            scheduler.refresh_all();
        }
        for probe in [&a, &b] {
            assert_eq!(probe.inits, 1);
            assert_eq!(probe.updates, 2);
            assert_eq!(probe.refreshes, 1);
        }
    }

    #[test]
    fn test_run_refreshes_on_interval() {
        let mut a = Probe::default();
        {
            let mut scheduler: Scheduler<'_, 1> = Scheduler::with_refresh_interval(Millis(1000));
            scheduler.add(&mut a).unwrap();
            for now in [0, 500, 999, 1000, 1500, 2000, 2001] {
                scheduler.run(Millis(now));
            }
        }
        assert_eq!(a.updates, 7);
        // due at 1000 and 2000
        assert_eq!(a.refreshes, 2);
    }

    #[test]
    fn test_run_refreshes_after_clock_wrap() {
        let mut a = Probe::default();
        {
            let mut scheduler: Scheduler<'_, 1> = Scheduler::with_refresh_interval(Millis(1000));
            scheduler.add(&mut a).unwrap();
            scheduler.run(Millis(u32::MAX - 1));
            scheduler.run(Millis(5));
        }
        assert_eq!(a.refreshes, 2);
    }
}
