//! Terminal rendering for planner types.
//!
//! Extension traits that add colored output to planner-core types using
//! owo_colors.

use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use planner_core::{Event, Expense, Guest, Task};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    /// One-line summary used in lists.
    fn render(&self) -> String {
        let mut line = format!(
            "{} {}  {}",
            format!("#{}", self.id).dimmed(),
            self.title.bold(),
            date_label(self.date)
        );

        if let Some(location) = &self.location {
            line.push_str(&format!("  @ {}", location));
        }

        line.push_str(&format!(
            "  {}",
            format!("{} / {}", money(self.spent), money(self.budget)).dimmed()
        ));

        line
    }
}

impl Render for Guest {
    fn render(&self) -> String {
        let id = format!("#{}", self.id);

        match &self.email {
            Some(email) => format!(
                "{} {} {}",
                id.dimmed(),
                self.name,
                format!("<{}>", email).dimmed()
            ),
            None => format!("{} {}", id.dimmed(), self.name),
        }
    }
}

impl Render for Task {
    fn render(&self) -> String {
        let check = if self.completed {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };

        let description = if self.completed {
            self.description.strikethrough().dimmed().to_string()
        } else {
            self.description.clone()
        };

        let mut line = format!("{} {} {}", check, format!("#{}", self.id).dimmed(), description);
        if let Some(due) = self.due_date {
            line.push_str(&format!("  {}", format!("due {}", date_label(due)).dimmed()));
        }
        line
    }
}

impl Render for Expense {
    fn render(&self) -> String {
        format!(
            "{} {}  {}",
            format!("#{}", self.id).dimmed(),
            self.description,
            money(self.amount)
        )
    }
}

/// Remaining budget, red when overspent.
pub fn render_remaining(event: &Event) -> String {
    let remaining = event.remaining();
    let text = money(remaining);

    if remaining < 0.0 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

/// Format an amount with two decimals.
pub fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Human-readable date label (e.g. "Today", "Tomorrow", "Wed Feb 25 2026").
pub fn date_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(150.5), "150.50");
        assert_eq!(money(-50.5), "-50.50");
        assert_eq!(money(0.0), "0.00");
    }

    #[test]
    fn pluralize_by_count() {
        assert_eq!(pluralize("guest", 1), "guest");
        assert_eq!(pluralize("guest", 0), "guests");
        assert_eq!(pluralize("task", 3), "tasks");
    }

    #[test]
    fn far_dates_use_full_label() {
        let date = NaiveDate::from_ymd_opt(2001, 2, 3).unwrap();
        assert_eq!(date_label(date), "Sat Feb 3 2001");
    }
}
