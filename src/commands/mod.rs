pub mod config;
pub mod delete;
pub mod edit;
pub mod expense;
pub mod guest;
pub mod list;
pub mod new;
pub mod notes;
pub mod reminders;
pub mod show;
pub mod task;

use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{Event, EventId, EventStore, Storage};

/// Look up an event for a read-only command, failing with a helpful message.
pub fn require_event<S: Storage>(store: &EventStore<S>, id: EventId) -> Result<&Event> {
    match store.get(id) {
        Some(event) => Ok(event),
        None => anyhow::bail!("Event #{} not found. Run `planner list` to see your events.", id),
    }
}

/// Lookup misses on mutations are not errors, just a notice.
pub fn report_miss(what: &str) {
    println!("{}", format!("  Nothing changed: {} not found", what).dimmed());
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::NaiveDate;
    use planner_core::{EventDetails, EventId, EventStore, MemoryStorage};

    /// In-memory store holding one event dated 2026-11-01 with a budget of 100.
    pub fn store_with_event() -> (EventStore<MemoryStorage>, EventId) {
        let mut store = EventStore::open(MemoryStorage::new());
        let id = store
            .create(EventDetails {
                title: "Party".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
                location: None,
                budget: "100".to_string(),
            })
            .unwrap();
        (store, id)
    }
}
