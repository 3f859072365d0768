use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{EventId, EventStore, Storage};

/// Print an event's notes, or overwrite them when `update` is given.
pub fn run<S: Storage>(
    store: &mut EventStore<S>,
    id: EventId,
    update: Option<String>,
) -> Result<()> {
    let Some(event) = store.get(id) else {
        super::report_miss(&format!("event #{}", id));
        return Ok(());
    };
    let title = event.title.clone();

    match update {
        Some(text) => {
            store.save_notes(id, &text)?;
            println!("{}", format!("  Notes saved for {}", title).green());
        }
        None => {
            let notes = store.notes(id);
            if notes.is_empty() {
                println!("{}", "No notes yet. Add some with `--set`.".dimmed());
            } else {
                println!("{}", notes);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use planner_core::{EventDetails, MemoryStorage};

    #[test]
    fn notes_are_saved_for_known_events() {
        let mut store = EventStore::open(MemoryStorage::new());
        let id = store
            .create(EventDetails {
                title: "Party".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
                location: None,
                budget: String::new(),
            })
            .unwrap();

        run(&mut store, id, Some("Bring chairs".into())).unwrap();
        assert_eq!(store.notes(id), "Bring chairs");

        run(&mut store, id, Some(String::new())).unwrap();
        assert_eq!(store.notes(id), "");
    }

    #[test]
    fn unknown_event_is_a_notice_and_writes_nothing() {
        let mut store = EventStore::open(MemoryStorage::new());

        assert!(run(&mut store, EventId(999), Some("hi".into())).is_ok());
        assert!(run(&mut store, EventId(999), None).is_ok());
        assert!(!store.storage().contains_key("eventInfo_999"));
    }
}
