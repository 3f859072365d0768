use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{EventDetails, EventId, EventStore, Storage};

use crate::dates::parse_date;
use crate::render::money;

/// Update an event. Fields not given keep their current value.
pub fn run<S: Storage>(
    store: &mut EventStore<S>,
    id: EventId,
    title: Option<String>,
    date: Option<String>,
    location: Option<String>,
    budget: Option<String>,
) -> Result<()> {
    let Some(current) = store.get(id) else {
        super::report_miss(&format!("event #{}", id));
        return Ok(());
    };

    let title = title.unwrap_or_else(|| current.title.clone());
    let date = date.unwrap_or_else(|| current.date.format("%Y-%m-%d").to_string());
    let location = location.unwrap_or_else(|| current.location.clone().unwrap_or_default());
    let budget = budget.unwrap_or_else(|| current.budget.to_string());

    let details = EventDetails::from_input(&title, &date, &location, &budget, parse_date)?;
    store.update(id, details)?;

    if let Some(event) = store.get(id) {
        println!(
            "{}",
            format!(
                "  Updated: {} on {} (budget {})",
                event.title,
                event.date,
                money(event.budget)
            )
            .yellow()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use planner_core::MemoryStorage;

    fn store_with_event() -> (EventStore<MemoryStorage>, EventId) {
        let mut store = EventStore::open(MemoryStorage::new());
        let details = EventDetails {
            title: "Party".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            location: Some("Hall".to_string()),
            budget: "150.5".to_string(),
        };
        let id = store.create(details).unwrap();
        (store, id)
    }

    #[test]
    fn unspecified_fields_keep_their_values() {
        let (mut store, id) = store_with_event();

        run(&mut store, id, Some("New".into()), None, None, None).unwrap();

        let event = store.get(id).unwrap();
        assert_eq!(event.title, "New");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
        assert_eq!(event.location.as_deref(), Some("Hall"));
        assert_eq!(event.budget, 150.5);
    }

    #[test]
    fn given_fields_are_replaced() {
        let (mut store, id) = store_with_event();

        run(
            &mut store,
            id,
            None,
            Some("2026-12-24".into()),
            Some("".into()),
            Some("abc".into()),
        )
        .unwrap();

        let event = store.get(id).unwrap();
        assert_eq!(event.title, "Party");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 12, 24).unwrap());
        assert_eq!(event.location, None);
        assert_eq!(event.budget, 0.0);
    }

    #[test]
    fn blank_title_is_rejected_and_nothing_changes() {
        let (mut store, id) = store_with_event();
        let before = store.events().to_vec();

        assert!(run(&mut store, id, Some("  ".into()), None, None, None).is_err());
        assert!(run(&mut store, id, None, Some("".into()), None, None).is_err());
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn unknown_event_is_a_notice_not_an_error() {
        let (mut store, _) = store_with_event();
        let before = store.events().to_vec();

        assert!(run(&mut store, EventId(999), Some("X".into()), None, None, None).is_ok());
        assert_eq!(store.events(), before.as_slice());
    }
}
