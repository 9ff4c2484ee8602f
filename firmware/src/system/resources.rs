//! Hardware Resource Management
//!
//! Allocates pins to the tasks that own them, so no two tasks can drive the same hardware.
//!
//! # Resource Groups
//! - Presence Sensor: HC-SR04 ultrasonic sensor trigger and echo pins
//! - Status LED: on-board LED mirroring the presence state

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// HC-SR04 ultrasonic distance sensor pins
    presence_sensor: PresenceSensorResources {
       trigger_pin: PIN_15,
       echo_pin: PIN_14,
    },
    /// On-board LED of the Pico 2
    status_led: StatusLedResources {
       led_pin: PIN_25,
    },
}
