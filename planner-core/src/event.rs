//! Event records and their nested guests, tasks and expenses.
//!
//! These are plain data: every change goes through
//! [`EventStore`](crate::store::EventStore), which keeps the invariants
//! (unique ids, `spent` matching the expenses).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{PlannerError, PlannerResult};
use crate::id::{EventId, ExpenseId, GuestId, TaskId};

/// A planned occasion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub budget: f64,
    /// Sum of all expense amounts, kept up to date by the store.
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    #[serde(default)]
    pub amount: f64,
}

impl Event {
    /// Budget left after expenses. Negative when over budget.
    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Largest id used by this event or anything nested in it.
    pub(crate) fn max_id(&self) -> u64 {
        let guests = self.guests.iter().map(|g| g.id.value());
        let tasks = self.tasks.iter().map(|t| t.id.value());
        let expenses = self.expenses.iter().map(|e| e.id.value());

        guests
            .chain(tasks)
            .chain(expenses)
            .fold(self.id.value(), u64::max)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The user-editable fields of an event, as passed to create and update.
///
/// `budget` is kept as typed by the user; the store coerces it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub title: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub budget: String,
}

impl EventDetails {
    /// Presence validation for form-style input.
    ///
    /// Title and date are required. `parse_date` turns the raw date text into
    /// a calendar date; an unparsable date is reported like a missing one.
    pub fn from_input<F>(
        title: &str,
        date: &str,
        location: &str,
        budget: &str,
        parse_date: F,
    ) -> PlannerResult<Self>
    where
        F: Fn(&str) -> Option<NaiveDate>,
    {
        let title = title.trim();
        let date = date.trim();

        if title.is_empty() || date.is_empty() {
            return Err(PlannerError::Validation(
                "Please fill in the event title and date".into(),
            ));
        }

        let date = parse_date(date).ok_or_else(|| {
            PlannerError::Validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", date))
        })?;

        let location = location.trim();

        Ok(EventDetails {
            title: title.to_string(),
            date,
            location: (!location.is_empty()).then(|| location.to_string()),
            budget: budget.to_string(),
        })
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Treat `""` (as written by form inputs left blank) the same as a missing value.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
