//! HC-SR04 ultrasonic range sensor
//!
//! Blocking driver for the detector's synchronous measurement interface.
//!
//! # Sensor Operation
//! - A 10µs high pulse on the trigger pin starts a measurement
//! - The sensor answers with a high pulse on the echo pin, as wide as the sound's round trip
//! - About 58µs of echo per centimetre of distance
//! - Without a reflecting object the echo stays high for ~38ms and then gives up
//!
//! # Timing
//! The echo is timed by busy-waiting on the pin, so a measurement blocks the executor for at most
//! [`ECHO_TIMEOUT`]. That is acceptable because the presence task is the only one doing real work.

use defmt::trace;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use embassy_time::{block_for, Duration, Instant};
use ultrasonic_presence::{EchoDuration, RangeSensor};

/// Low time before the trigger pulse, so the pulse has a clean rising edge
const TRIGGER_SETTLE: Duration = Duration::from_micros(2);

/// Trigger pulse width required by the datasheet
const TRIGGER_PULSE: Duration = Duration::from_micros(10);

/// Give up on an echo after this long (longer than the sensor's own ~38ms timeout)
pub const ECHO_TIMEOUT: Duration = Duration::from_millis(50);

pub struct Hcsr04<'d> {
    trigger: Output<'d>,
    echo: Input<'d>,
}

impl<'d> Hcsr04<'d> {
    /// Configure the trigger pin as output (idle low) and the echo pin as input
    pub fn new(trigger_pin: Peri<'d, impl Pin>, echo_pin: Peri<'d, impl Pin>) -> Self {
        Self {
            trigger: Output::new(trigger_pin, Level::Low),
            echo: Input::new(echo_pin, Pull::None),
        }
    }

    /// Emit the trigger pulse
    fn trigger(&mut self) {
        self.trigger.set_low();
        block_for(TRIGGER_SETTLE);
        self.trigger.set_high();
        block_for(TRIGGER_PULSE);
        self.trigger.set_low();
    }

    /// Spin until the echo pin reaches `high`, or `deadline` passes
    fn wait_for_level(&self, high: bool, deadline: Instant) -> Option<Instant> {
        while self.echo.is_high() != high {
            if Instant::now() >= deadline {
                return None;
            }
        }
        Some(Instant::now())
    }

    /// Width of the next high pulse on the echo pin
    ///
    /// A pulse already in progress is skipped, its start was not seen.
    fn echo_width(&self) -> Option<Duration> {
        let deadline = Instant::now() + ECHO_TIMEOUT;
        self.wait_for_level(false, deadline)?;
        let start = self.wait_for_level(true, deadline)?;
        let end = self.wait_for_level(false, deadline)?;
        Some(end - start)
    }
}

impl RangeSensor for Hcsr04<'_> {
    fn measure(&mut self) -> EchoDuration {
        self.trigger();

        match self.echo_width() {
            Some(width) => EchoDuration(u32::try_from(width.as_micros()).unwrap_or(u32::MAX)),
            None => {
                trace!("no echo within {} ms", ECHO_TIMEOUT.as_millis());
                EchoDuration::NO_ECHO
            }
        }
    }
}
