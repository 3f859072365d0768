use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{EventStore, Storage};

use crate::render::Render;

pub fn run<S: Storage>(store: &EventStore<S>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.events())?);
        return Ok(());
    }

    if store.events().is_empty() {
        println!("{}", "No events yet. Create one with `planner new`.".dimmed());
        return Ok(());
    }

    for event in store.events() {
        println!("{}", event.render());
    }

    Ok(())
}
