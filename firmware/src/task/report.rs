//! Report task
//!
//! Drains the event channel and hands presence reports to the uplink. The uplink to the
//! home automation hub is not part of this firmware, so reports end up in the defmt log.

use defmt::info;

use crate::system::event::{self, Events};

/// Main report task
///
/// Waits for events and forwards each presence report.
#[embassy_executor::task]
pub async fn report() {
    info!("Reporter started");
    loop {
        match event::wait().await {
            Events::PresenceReported(report) => {
                info!("report: {}", report.message.as_str());
            }
        }
    }
}
