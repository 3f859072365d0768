use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use planner_core::reminder::days_until;
use planner_core::{EventStore, Storage};

use crate::render::{date_label, pluralize};

pub fn run<S: Storage>(store: &EventStore<S>) -> Result<()> {
    let upcoming = store.reminders();
    let today = Local::now().date_naive();

    if upcoming.is_empty() {
        println!(
            "{}",
            format!("Nothing coming up in the next {} days", store.reminder_days()).dimmed()
        );
        return Ok(());
    }

    println!("{}", "Coming up".bold());
    for event in upcoming {
        let days = days_until(event, today);
        let when = match days {
            0 => "today".to_string(),
            n => format!("in {} {}", n, pluralize("day", n as usize)),
        };

        println!(
            "  {} {} - {} {}",
            format!("#{}", event.id).dimmed(),
            event.title.bold(),
            date_label(event.date),
            format!("({})", when).dimmed()
        );
    }

    Ok(())
}
