use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use planner_core::{EventId, EventStore, Storage};

use crate::render::pluralize;

pub fn run<S: Storage>(store: &mut EventStore<S>, id: EventId, force: bool) -> Result<()> {
    let Some(event) = store.get(id) else {
        super::report_miss(&format!("event #{}", id));
        return Ok(());
    };

    let attached = event.guests.len() + event.tasks.len() + event.expenses.len();

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete '{}' and {} attached {}?",
                event.title,
                attached,
                pluralize("item", attached)
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    let title = event.title.clone();
    store.delete(id)?;
    println!("{}", format!("  Deleted: {}", title).red());

    Ok(())
}
