//! Presence detection
//!
//! Samples the HC-SR04 and turns the echo durations into a debounced presence state.
//!
//! # Installation
//! The sensor points across a doorway at chest height. Somebody standing in the doorway
//! gives a short echo, an empty doorway a long one:
//! - Closer than 4 feet (7104µs) counts towards present
//! - Further than 6 feet (10656µs) counts towards not present
//! - In between nothing changes
//!
//! # Timing
//! - The scheduler is ticked every 100ms
//! - The detector itself samples at most once per second
//! - 4 agreeing samples in a row are needed for a state change
//! - The current state is re-sent every 5 minutes

use defmt::{error, info};
use embassy_time::{Duration, Ticker};
use ultrasonic_presence::{Clock, DetectorConfig, EchoDuration, Scheduler, UltrasonicPresence};

use crate::system::{event::ChannelNotifier, hcsr04::Hcsr04, resources::PresenceSensorResources, uptime::Uptime};

/// Name reported with every state change, must start with "presence"
const DEVICE_NAME: &str = "presence1";

/// Nobody is in the doorway at power-up
const INITIAL_STATE: bool = false;

/// A short echo (somebody in the doorway) means present
const LONG_IS_PRESENT: bool = false;

/// 6 feet
const LONG_THRESHOLD: EchoDuration = EchoDuration::from_inches(6 * 12);

/// 4 feet
const SHORT_THRESHOLD: EchoDuration = EchoDuration::from_inches(4 * 12);

/// How often the scheduler runs; the detector rate limits its own measurements
const POLL_PERIOD: Duration = Duration::from_millis(100);

/// Number of devices the scheduler can hold
const MAX_DEVICES: usize = 1;

/// Presence detection task
///
/// Owns the sensor, the detector and the scheduler. Reports leave through the event channel.
#[embassy_executor::task]
pub async fn presence_detect(r: PresenceSensorResources) {
    let config = match DetectorConfig::builder(LONG_IS_PRESENT, LONG_THRESHOLD, SHORT_THRESHOLD).build() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid presence configuration: {}", e);
            return;
        }
    };

    let sensor = Hcsr04::new(r.trigger_pin, r.echo_pin);
    let mut device = match UltrasonicPresence::new(DEVICE_NAME, sensor, Uptime, ChannelNotifier, config, INITIAL_STATE)
    {
        Ok(device) => device,
        Err(e) => {
            error!("invalid presence device: {}", e);
            return;
        }
    };

    let mut scheduler: Scheduler<'_, MAX_DEVICES> = Scheduler::new();
    if let Err(e) = scheduler.add(&mut device) {
        error!("cannot schedule {}: {}", DEVICE_NAME, e);
        return;
    }

    info!("Presence detection started");
    scheduler.init_all();

    let mut ticker = Ticker::every(POLL_PERIOD);
    loop {
        ticker.next().await;
        scheduler.run(Uptime.now());
    }
}
