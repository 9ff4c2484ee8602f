//! Presence events and the reports sent for them
//!
//! A report is the device name followed by the presence label, e.g. `presence1 present`.

use core::fmt::{self, Write};

use heapless::String;

/// Label sent when somebody is present
pub const PRESENT_LABEL: &str = "present";

/// Label sent when nobody is present
pub const NOT_PRESENT_LABEL: &str = "notpresent";

/// Observable presence state, emitted on a state change or a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresenceEvent {
    pub is_present: bool,
}

impl PresenceEvent {
    pub const fn new(is_present: bool) -> Self {
        Self { is_present }
    }

    pub fn label(&self) -> &'static str {
        if self.is_present {
            PRESENT_LABEL
        } else {
            NOT_PRESENT_LABEL
        }
    }
}

impl fmt::Display for PresenceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named presence event, as transmitted downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report<'a> {
    pub name: &'a str,
    pub event: PresenceEvent,
}

impl<'a> Report<'a> {
    pub const fn new(name: &'a str, event: PresenceEvent) -> Self {
        Self { name, event }
    }

    /// Render into a fixed-capacity string
    ///
    /// Fails if the report does not fit in `N` bytes.
    pub fn to_message<const N: usize>(&self) -> Result<String<N>, fmt::Error> {
        let mut message = String::new();
        write!(message, "{}", self)?;
        Ok(message)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.event)
    }
}
