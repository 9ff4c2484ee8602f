//! Presence node firmware entry point
//!
//! Initializes the system and spawns the presence detection, reporting and indicator tasks.

#![no_std]
#![no_main]

use crate::task::{presence_detect::presence_detect, report::report, status_led::status_led};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use system::resources::{AssignedResources, PresenceSensorResources, StatusLedResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    // Consumers first, so no report gets dropped while they are not yet listening
    spawner.spawn(report()).unwrap();
    spawner.spawn(status_led(r.status_led)).unwrap();
    spawner.spawn(presence_detect(r.presence_sensor)).unwrap();
}
