//! Collaborators of the detector: range sensor, clock and notifier

use crate::event::PresenceEvent;
use crate::units::{EchoDuration, Millis};

/// Something that can trigger a ranging pulse and time its echo
pub trait RangeSensor {
    /// Trigger one measurement and block until the echo ends or times out
    ///
    /// A missing echo is reported as [`EchoDuration::NO_ECHO`] rather than an error.
    fn measure(&mut self) -> EchoDuration;
}

/// Free-running millisecond clock
pub trait Clock {
    fn now(&self) -> Millis;
}

/// Outbound channel for presence reports
///
/// Delivery is fire and forget.
pub trait Notifier {
    fn notify(&mut self, name: &str, event: PresenceEvent);
}

impl<T: RangeSensor + ?Sized> RangeSensor for &mut T {
    fn measure(&mut self) -> EchoDuration {
        T::measure(self)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Millis {
        T::now(self)
    }
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, name: &str, event: PresenceEvent) {
        T::notify(self, name, event)
    }
}
