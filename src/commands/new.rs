use std::io::IsTerminal;

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use planner_core::{EventDetails, EventStore, Storage};

use crate::dates::parse_date;

pub fn run<S: Storage>(
    store: &mut EventStore<S>,
    title: Option<String>,
    date: Option<String>,
    location: Option<String>,
    budget: Option<String>,
) -> Result<()> {
    let interactive = (title.is_none() || date.is_none()) && std::io::stdin().is_terminal();

    let title = match title {
        Some(t) => t,
        None if interactive => prompt("  Title")?,
        None => String::new(),
    };

    let date = match date {
        Some(d) => d,
        None if interactive => prompt("  When?")?,
        None => String::new(),
    };

    let location = match location {
        Some(l) => l,
        None if interactive => prompt("  Where? (skip)")?,
        None => String::new(),
    };

    let budget = match budget {
        Some(b) => b,
        None if interactive => prompt("  Budget (skip)")?,
        None => String::new(),
    };

    let details = EventDetails::from_input(&title, &date, &location, &budget, parse_date)?;
    let id = store.create(details)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {} (#{})", title.trim(), id).green());

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
