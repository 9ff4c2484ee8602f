//! Status LED
//!
//! Mirrors the presence state on the on-board LED: on while present, off otherwise.
//! Every report is affirmed with a short burst of blinks before the LED settles.

use defmt::debug;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};

use crate::system::{indicator, resources::StatusLedResources};

/// Interval for LED blinking when affirming a report
const AFFIRM_BLINK_INTERVAL: Duration = Duration::from_millis(30);

/// Number of toggles in an affirm burst
const AFFIRM_BLINKS: usize = 6;

/// Status LED task
#[embassy_executor::task]
pub async fn status_led(r: StatusLedResources) {
    let mut led = Output::new(r.led_pin, Level::Low);

    loop {
        let is_present = indicator::wait().await;
        debug!("status led: present = {}", is_present);

        for _ in 0..AFFIRM_BLINKS {
            led.toggle();
            Timer::after(AFFIRM_BLINK_INTERVAL).await;
        }

        led.set_level(if is_present { Level::High } else { Level::Low });
    }
}
