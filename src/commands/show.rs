use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{EventId, EventStore, Storage};

use crate::render::{date_label, money, pluralize, render_remaining, Render};

pub fn run<S: Storage>(store: &EventStore<S>, id: EventId) -> Result<()> {
    let event = super::require_event(store, id)?;

    println!("{} {}", event.title.bold(), format!("#{}", event.id).dimmed());
    println!("  Date:      {}", date_label(event.date));
    if let Some(location) = &event.location {
        println!("  Location:  {}", location);
    }

    println!();
    println!("{}", "Budget".bold());
    println!("  Budget:    {}", money(event.budget));
    println!("  Spent:     {}", money(event.spent));
    println!("  Remaining: {}", render_remaining(event));
    for expense in &event.expenses {
        println!("    {}", expense.render());
    }

    println!();
    println!(
        "{} {}",
        "Guests".bold(),
        format!("({} {})", event.guests.len(), pluralize("guest", event.guests.len())).dimmed()
    );
    if event.guests.is_empty() {
        println!("  {}", "No guests yet".dimmed());
    }
    for guest in &event.guests {
        println!("  {}", guest.render());
    }

    println!();
    println!(
        "{} {}",
        "Tasks".bold(),
        format!("({}/{} done)", event.completed_tasks(), event.tasks.len()).dimmed()
    );
    if event.tasks.is_empty() {
        println!("  {}", "No tasks yet".dimmed());
    }
    for task in &event.tasks {
        println!("  {}", task.render());
    }

    let notes = store.notes(id);
    if !notes.is_empty() {
        println!();
        println!("{}", "Notes".bold());
        for line in notes.lines() {
            println!("  {}", line);
        }
    }

    Ok(())
}
