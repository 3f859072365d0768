use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{EventId, EventStore, GuestId, Storage};

pub fn add<S: Storage>(
    store: &mut EventStore<S>,
    event: EventId,
    name: &str,
    email: Option<&str>,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Guest name can't be empty");
    }
    let email = email.map(str::trim).filter(|e| !e.is_empty());

    match store.add_guest(event, name, email)? {
        Some(id) => println!("{}", format!("  Added guest: {} (#{})", name, id).green()),
        None => super::report_miss(&format!("event #{}", event)),
    }

    Ok(())
}

pub fn remove<S: Storage>(store: &mut EventStore<S>, event: EventId, guest: GuestId) -> Result<()> {
    if store.remove_guest(event, guest)? {
        println!("{}", format!("  Removed guest #{}", guest).red());
    } else {
        super::report_miss(&format!("guest #{} on event #{}", guest, event));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::store_with_event;

    #[test]
    fn blank_name_is_rejected() {
        let (mut store, id) = store_with_event();

        assert!(add(&mut store, id, "  ", None).is_err());
        assert!(add(&mut store, id, "", Some("a@example.com")).is_err());
        assert!(store.get(id).unwrap().guests.is_empty());
    }

    #[test]
    fn name_is_trimmed_and_blank_email_dropped() {
        let (mut store, id) = store_with_event();

        add(&mut store, id, " Anna ", Some("  ")).unwrap();

        let guests = &store.get(id).unwrap().guests;
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "Anna");
        assert_eq!(guests[0].email, None);
    }

    #[test]
    fn misses_are_not_errors() {
        let (mut store, id) = store_with_event();

        assert!(add(&mut store, EventId(999), "Bob", None).is_ok());
        assert!(remove(&mut store, id, GuestId(999)).is_ok());
        assert!(store.get(id).unwrap().guests.is_empty());
    }
}
