use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use planner_core::PlannerConfig;

pub fn run(reminder_days: Option<i64>) -> Result<()> {
    let config_path = PlannerConfig::config_path()?;
    let mut config = PlannerConfig::load()?;

    if let Some(days) = reminder_days {
        config = set_reminder_days(&config_path, days)?;
        println!("{} Reminder window set to {} days", "✓".green(), days);
        println!();
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());
    println!();
    println!("{}", "Reminders".bold());
    println!("  Window:  {} days", config.reminder_days);

    Ok(())
}

/// Store a new reminder window in the config file at `path`, keeping its other values.
fn set_reminder_days(path: &Path, days: i64) -> Result<PlannerConfig> {
    if days < 0 {
        bail!("Reminder window can't be negative");
    }

    let mut config = PlannerConfig::load_from(path)?;
    config.reminder_days = days;
    config.save(path)?;

    log::debug!("Saved reminder window of {} days to {}", days, path.display());
    Ok(config)
}
