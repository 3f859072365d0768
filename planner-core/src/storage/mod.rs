//! String key-value backends for persisted planner state.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::PlannerResult;

/// A durable string-to-string map.
///
/// Reads distinguish "absent" (`Ok(None)`) from "unreadable" (`Err`) so
/// callers can decide how soft to fail.
pub trait Storage {
    fn get(&self, key: &str) -> PlannerResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> PlannerResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> PlannerResult<()>;
}
