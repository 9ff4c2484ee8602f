//! System Events
//!
//! Defines the events and channel that carry presence reports from the detection task
//! to the reporting task.

use defmt::{warn, Format};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::String;
use ultrasonic_presence::{Notifier, PresenceEvent, Report};

use crate::system::indicator;

/// Longest report text we transmit, e.g. "presence_front_door notpresent"
pub const REPORT_CAPACITY: usize = 48;

/// Multi-producer, single-consumer event channel with capacity of 10
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Events, 10> = Channel::new();

/// Sends an event without waiting, dropping it if the channel is full
pub fn try_send(event: Events) {
    if EVENT_CHANNEL.sender().try_send(event).is_err() {
        warn!("event channel full, dropping event");
    }
}

/// Receives the next event from the system channel
pub async fn wait() -> Events {
    EVENT_CHANNEL.receiver().receive().await
}

/// System-wide events
#[derive(Debug, Clone, Format)]
pub enum Events {
    /// A presence device reported its state, either because it changed or on refresh
    PresenceReported(PresenceReport),
}

/// Rendered report, ready for transmission
#[derive(Debug, Clone, Format)]
pub struct PresenceReport {
    /// e.g. "presence1 present"
    pub message: String<REPORT_CAPACITY>,
    pub is_present: bool,
}

/// Notifier handing presence reports to the event channel
///
/// Called from the synchronous detector, so it never waits for room in the channel.
pub struct ChannelNotifier;

impl Notifier for ChannelNotifier {
    fn notify(&mut self, name: &str, event: PresenceEvent) {
        indicator::send(event.is_present);

        match Report::new(name, event).to_message::<REPORT_CAPACITY>() {
            Ok(message) => try_send(Events::PresenceReported(PresenceReport {
                message,
                is_present: event.is_present,
            })),
            Err(_) => warn!("report for {} does not fit {} bytes", name, REPORT_CAPACITY),
        }
    }
}
