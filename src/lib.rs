//! Presence detection with an ultrasonic range sensor
//!
//! Turns HC-SR04 style echo durations into a debounced present / not-present state.
//!
//! # Detection
//! - Measurements are rate limited by a [`SamplingGate`] on a wrapping millisecond clock
//! - Echoes above the validity limit (timeouts, out of range) are ignored
//! - Two thresholds with a dead band in between give hysteresis, see [`hysteresis`]
//! - A state change needs several supporting readings in a row, see [`debounce`]
//! - Every state change produces a [`PresenceEvent`], reported as e.g. `presence1 present`
//!
//! # Integration
//! The hardware side is abstracted by [`RangeSensor`], [`Clock`] and [`Notifier`].
//! [`UltrasonicPresence`] ties them to a [`PresenceDetector`] and implements [`Device`],
//! so it can be driven together with other devices by a [`Scheduler`].
//!
//! # Logging
//! Enable the `defmt` feature to get defmt log output and `defmt::Format` on all public types.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod debounce;
pub mod detector;
pub mod device;
pub mod event;
pub mod gate;
pub mod hysteresis;
pub mod scheduler;
pub mod traits;
pub mod units;

pub use config::{ConfigError, DetectorConfig, DetectorConfigBuilder};
pub use detector::PresenceDetector;
pub use device::{Device, UltrasonicPresence};
pub use event::{PresenceEvent, Report};
pub use gate::SamplingGate;
pub use hysteresis::{Hysteresis, Polarity};
pub use scheduler::{Scheduler, SchedulerError};
pub use traits::{Clock, Notifier, RangeSensor};
pub use units::{EchoDuration, Millis};
