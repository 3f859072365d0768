use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{EventId, EventStore, Storage, TaskId};

use crate::dates::parse_date;

pub fn add<S: Storage>(
    store: &mut EventStore<S>,
    event: EventId,
    description: &str,
    due: Option<&str>,
) -> Result<()> {
    let description = description.trim();
    if description.is_empty() {
        anyhow::bail!("Task description can't be empty");
    }

    let due_date = match due.map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => match parse_date(raw) {
            Some(date) => Some(date),
            None => anyhow::bail!("Could not parse due date: \"{}\"", raw),
        },
        None => None,
    };

    match store.add_task(event, description, due_date)? {
        Some(id) => println!("{}", format!("  Added task: {} (#{})", description, id).green()),
        None => super::report_miss(&format!("event #{}", event)),
    }

    Ok(())
}

pub fn toggle<S: Storage>(store: &mut EventStore<S>, event: EventId, task: TaskId) -> Result<()> {
    match store.toggle_task_completion(event, task)? {
        Some(true) => println!("{}", format!("  Task #{} done", task).green()),
        Some(false) => println!("{}", format!("  Task #{} reopened", task).yellow()),
        None => super::report_miss(&format!("task #{} on event #{}", task, event)),
    }

    Ok(())
}
