//! Scheduled event records.

use std::fmt;

use crate::time::TimeOfDay;

/// Identifier of an event, unique within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u64);

impl EventId {
    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EventId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single scheduled item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Unique event ID (sequential per store).
    pub id: EventId,
    /// Time of day; fixed at creation.
    pub time: TimeOfDay,
    /// Free text, stored as typed.
    pub description: String,
    /// Whether the event has been checked off.
    pub completed: bool,
}

impl Event {
    /// Create a new, not yet completed event.
    pub fn new(id: EventId, time: TimeOfDay, description: impl Into<String>) -> Self {
        Self {
            id,
            time,
            description: description.into(),
            completed: false,
        }
    }

    /// Percentage offset of this event on the 24-hour axis.
    pub fn position(&self) -> f64 {
        self.time.position()
    }
}
