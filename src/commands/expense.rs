use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{EventId, EventStore, Storage};

use crate::render::{money, render_remaining};

pub fn add<S: Storage>(
    store: &mut EventStore<S>,
    event: EventId,
    description: &str,
    amount: &str,
) -> Result<()> {
    let description = description.trim();
    if description.is_empty() || amount.trim().is_empty() {
        anyhow::bail!("Expense description and amount are required");
    }

    if store.add_expense(event, description, amount)?.is_none() {
        super::report_miss(&format!("event #{}", event));
        return Ok(());
    }

    let event = super::require_event(store, event)?;
    let added = event.expenses.last().map(|e| e.amount).unwrap_or_default();

    println!("{}", format!("  Added expense: {} {}", description, money(added)).green());
    println!(
        "  Spent {} of {}, remaining {}",
        money(event.spent),
        money(event.budget),
        render_remaining(event)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::store_with_event;

    #[test]
    fn description_and_amount_are_required() {
        let (mut store, id) = store_with_event();

        assert!(add(&mut store, id, " ", "10").is_err());
        assert!(add(&mut store, id, "Cake", "").is_err());
        assert!(add(&mut store, id, "Cake", "   ").is_err());

        let event = store.get(id).unwrap();
        assert!(event.expenses.is_empty());
        assert_eq!(event.spent, 0.0);
    }

    #[test]
    fn non_numeric_amount_is_recorded_as_zero() {
        let (mut store, id) = store_with_event();

        add(&mut store, id, "Cake", "100").unwrap();
        add(&mut store, id, "Typo", "abc").unwrap();

        let event = store.get(id).unwrap();
        assert_eq!(event.expenses.len(), 2);
        assert_eq!(event.spent, 100.0);
        assert_eq!(event.remaining(), 0.0);
    }

    #[test]
    fn unknown_event_is_a_notice() {
        let (mut store, _) = store_with_event();
        assert!(add(&mut store, EventId(999), "Cake", "10").is_ok());
    }
}
