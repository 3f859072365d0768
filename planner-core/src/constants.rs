/// Storage key holding the full event collection.
pub const EVENTS_KEY: &str = "events";

/// Prefix of the per-event notes keys (`eventInfo_<id>`).
pub const NOTES_KEY_PREFIX: &str = "eventInfo_";

/// Days ahead of today that count as "upcoming".
pub const DEFAULT_REMINDER_DAYS: i64 = 3;
