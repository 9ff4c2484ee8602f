//! Presence Indicator Module
//!
//! Signals the latest presence state to the status LED task. Only the most recent value
//! matters, so an embassy-sync Signal is used instead of a channel.
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Latest presence state, `true` when present
static PRESENCE_INDICATOR: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Signals the current presence state
///
/// Synchronous, safe to call from the detector's notifier.
pub fn send(is_present: bool) {
    PRESENCE_INDICATOR.signal(is_present);
}

/// Waits for the next presence state
pub async fn wait() -> bool {
    PRESENCE_INDICATOR.wait().await
}
