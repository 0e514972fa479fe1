//! Event store: the in-memory collection of events.
//!
//! Events are kept in creation order. Display order is derived separately
//! (see [`crate::timeline`]). Every mutation is total: unknown ids and blank
//! descriptions leave the store unchanged and report `false`/`None`.

use tracing::debug;

use crate::event::{Event, EventId};
use crate::time::TimeOfDay;

/// Ordered, owned collection of events.
#[derive(Debug)]
pub struct EventStore {
    /// All events in creation order.
    events: Vec<Event>,
    /// Next event ID to assign.
    next_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// All events in creation order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events marked completed.
    pub fn completed_count(&self) -> usize {
        self.events.iter().filter(|e| e.completed).count()
    }

    /// Append a new event.
    ///
    /// Returns `None` without touching the store if the description is empty
    /// or whitespace only.
    pub fn add(&mut self, description: impl Into<String>, time: TimeOfDay) -> Option<EventId> {
        let description = description.into();
        if description.trim().is_empty() {
            debug!(%time, "Ignoring add with blank description");
            return None;
        }

        // next_id never reset, so ids are not reused after deletion
        let id = EventId::from(self.next_id);
        self.next_id += 1;
        self.events.push(Event::new(id, time, description));

        debug!(%id, %time, "Event added");
        Some(id)
    }

    /// Remove the event with `id`. Returns whether an event was removed.
    pub fn delete(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);

        let removed = self.events.len() != before;
        if !removed {
            debug!(%id, "Ignoring delete of unknown event");
        }
        removed
    }

    /// Flip the completed flag of the event with `id`.
    pub fn toggle_complete(&mut self, id: EventId) -> bool {
        match self.get_mut(id) {
            Some(event) => {
                event.completed = !event.completed;
                true
            }
            None => {
                debug!(%id, "Ignoring toggle of unknown event");
                false
            }
        }
    }

    /// Replace the description of the event with `id`.
    ///
    /// No emptiness check here; callers decide whether blank edits are allowed.
    pub fn update_description(&mut self, id: EventId, description: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(event) => {
                event.description = description.into();
                true
            }
            None => {
                debug!(%id, "Ignoring update of unknown event");
                false
            }
        }
    }

    fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }
}
