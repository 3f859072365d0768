//! Round-trip of the event collection and per-event notes through a [`Storage`].

use crate::constants::{EVENTS_KEY, NOTES_KEY_PREFIX};
use crate::error::PlannerResult;
use crate::event::Event;
use crate::id::EventId;
use crate::storage::Storage;

pub struct Persistence<S: Storage> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Persistence { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrite the stored collection with `events`.
    pub fn save_all(&mut self, events: &[Event]) -> PlannerResult<()> {
        let json = serde_json::to_string(events)?;
        self.storage.set(EVENTS_KEY, &json)
    }

    /// Load the stored collection.
    ///
    /// Absent, unreadable or malformed data all yield an empty collection.
    pub fn load_all(&self) -> Vec<Event> {
        let raw = match self.storage.get(EVENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read stored events, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(events) => events,
            Err(e) => {
                log::warn!("Stored events are malformed, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save_notes(&mut self, event_id: EventId, text: &str) -> PlannerResult<()> {
        self.storage.set(&notes_key(event_id), text)
    }

    /// Notes for `event_id`, or an empty string if there are none.
    pub fn load_notes(&self, event_id: EventId) -> String {
        match self.storage.get(&notes_key(event_id)) {
            Ok(text) => text.unwrap_or_default(),
            Err(e) => {
                log::warn!("Could not read notes for event {}: {}", event_id, e);
                String::new()
            }
        }
    }

    pub fn clear_notes(&mut self, event_id: EventId) -> PlannerResult<()> {
        self.storage.remove(&notes_key(event_id))
    }
}

fn notes_key(event_id: EventId) -> String {
    format!("{}{}", NOTES_KEY_PREFIX, event_id)
}
