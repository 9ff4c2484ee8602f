pub mod presence_detect;
pub mod report;
pub mod status_led;
