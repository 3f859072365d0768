//! Upcoming-event reminders.

use chrono::{Days, NaiveDate};

use crate::event::Event;

/// Events dated within `[today, today + window_days]`, in collection order.
///
/// Comparison is by calendar date only, so an event dated today counts as
/// upcoming for the whole day.
pub fn upcoming(events: &[Event], today: NaiveDate, window_days: i64) -> Vec<&Event> {
    let until = window_end(today, window_days);

    events
        .iter()
        .filter(|event| event.date >= today && event.date <= until)
        .collect()
}

/// Last day of the window. Saturates at the latest representable date.
fn window_end(today: NaiveDate, window_days: i64) -> NaiveDate {
    let days = Days::new(window_days.max(0).unsigned_abs());
    today.checked_add_days(days).unwrap_or(NaiveDate::MAX)
}

/// Whole days from `today` until the event (0 = today).
pub fn days_until(event: &Event, today: NaiveDate) -> i64 {
    (event.date - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::EventId;
    use chrono::Duration;

    fn event(id: u64, date: NaiveDate) -> Event {
        Event {
            id: EventId(id),
            title: format!("event {}", id),
            date,
            location: None,
            budget: 0.0,
            spent: 0.0,
            guests: vec![],
            tasks: vec![],
            expenses: vec![],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn window_is_closed_on_both_ends() {
        let today = today();
        let events = vec![
            event(1, today - Duration::days(1)),
            event(2, today),
            event(3, today + Duration::days(3)),
            event(4, today + Duration::days(4)),
        ];

        let ids: Vec<u64> = upcoming(&events, today, 3)
            .iter()
            .map(|e| e.id.value())
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn keeps_collection_order() {
        let today = today();
        let events = vec![
            event(1, today + Duration::days(2)),
            event(2, today + Duration::days(1)),
            event(3, today + Duration::days(3)),
        ];

        let ids: Vec<u64> = upcoming(&events, today, 3)
            .iter()
            .map(|e| e.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn crosses_month_boundaries() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 30).unwrap();
        let events = vec![event(1, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap())];
        assert_eq!(upcoming(&events, today, 3).len(), 1);
    }

    #[test]
    fn zero_window_means_today_only() {
        let today = today();
        let events = vec![event(1, today), event(2, today + Duration::days(1))];
        assert_eq!(upcoming(&events, today, 0).len(), 1);
        assert_eq!(upcoming(&events, today, -5).len(), 1);
    }

    #[test]
    fn huge_window_saturates_instead_of_overflowing() {
        let today = today();
        let events = vec![
            event(1, today - Duration::days(1)),
            event(2, today),
            event(3, NaiveDate::MAX),
        ];

        let ids: Vec<u64> = upcoming(&events, today, 1_000_000_000)
            .iter()
            .map(|e| e.id.value())
            .collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(upcoming(&events, today, i64::MAX).len(), 2);
    }

    #[test]
    fn days_until_counts_calendar_days() {
        let today = today();
        assert_eq!(days_until(&event(1, today), today), 0);
        assert_eq!(days_until(&event(1, today + Duration::days(2)), today), 2);
    }
}
