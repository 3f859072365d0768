//! Entity identifiers and the generator that hands them out.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map($name)
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`Event`](crate::Event).
    EventId
);
entity_id!(
    /// Identifier of a [`Guest`](crate::Guest).
    GuestId
);
entity_id!(
    /// Identifier of a [`Task`](crate::Task).
    TaskId
);
entity_id!(
    /// Identifier of an [`Expense`](crate::Expense).
    ExpenseId
);

/// Monotonic id source shared by all entity kinds.
///
/// Ids stay timestamp-shaped (milliseconds since the epoch) but two ids
/// handed out within the same millisecond still differ: every id is strictly
/// greater than the previous one.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, using the current wall clock as the lower bound.
    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next id, using `now_ms` as the lower bound.
    pub fn next_at(&mut self, now_ms: u64) -> u64 {
        self.last = now_ms.max(self.last.saturating_add(1));
        self.last
    }

    /// Make sure future ids are greater than `id`.
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_within_the_same_tick_are_distinct() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(1_000);
        assert_eq!((a, b, c), (1_000, 1_001, 1_002));
    }

    #[test]
    fn clock_going_backwards_does_not_reuse_ids() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(5_000);
        let b = ids.next_at(4_000);
        assert!(b > a);
    }

    #[test]
    fn observed_ids_are_never_handed_out_again() {
        let mut ids = IdGenerator::new();
        ids.observe(9_000);
        assert_eq!(ids.next_at(1_000), 9_001);
    }

    #[test]
    fn wall_clock_ids_are_strictly_increasing() {
        let mut ids = IdGenerator::new();
        let generated: Vec<u64> = (0..100).map(|_| ids.next_id()).collect();
        assert!(generated.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ids_parse_and_display() {
        let id: EventId = " 1700000000000 ".parse().unwrap();
        assert_eq!(id, EventId(1_700_000_000_000));
        assert_eq!(id.to_string(), "1700000000000");
        assert!("abc".parse::<TaskId>().is_err());
    }
}
