//! Millisecond clock for the detector
//!
//! Backed by the embassy time driver.

use embassy_time::Instant;
use ultrasonic_presence::{Clock, Millis};

/// Milliseconds since boot, truncated to a wrapping 32-bit counter
#[derive(Debug, Clone, Copy, Default)]
pub struct Uptime;

impl Clock for Uptime {
    fn now(&self) -> Millis {
        // truncation wraps after ~49.7 days, which the sampling gate handles
        Millis(Instant::now().as_millis() as u32)
    }
}
