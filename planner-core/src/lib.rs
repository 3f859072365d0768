//! Core of the event planner.
//!
//! This crate provides:
//! - [`EventStore`], the single owner of the event collection and its mutations
//! - [`Persistence`] over a [`Storage`] backend (files or memory), including per-event notes
//! - the [`reminder`] evaluator for events coming up in the next few days
//! - [`PlannerConfig`] for locating data and tuning the reminder window

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod id;
pub mod persistence;
pub mod reminder;
pub mod storage;
pub mod store;

pub use amount::coerce_amount;
pub use config::PlannerConfig;
pub use error::{PlannerError, PlannerResult};
pub use event::{Event, EventDetails, Expense, Guest, Task};
pub use id::{EventId, ExpenseId, GuestId, TaskId};
pub use persistence::Persistence;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::EventStore;
