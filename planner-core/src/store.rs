//! The event store: single owner of the event collection.

use chrono::{Local, NaiveDate};

use crate::amount::coerce_amount;
use crate::constants::DEFAULT_REMINDER_DAYS;
use crate::error::PlannerResult;
use crate::event::{Event, EventDetails, Expense, Guest, Task};
use crate::id::{EventId, ExpenseId, GuestId, IdGenerator, TaskId};
use crate::persistence::Persistence;
use crate::reminder;
use crate::storage::Storage;

type Listener = Box<dyn FnMut(&[Event])>;

/// Ordered collection of events plus everything needed to mutate it.
///
/// Every mutation writes the full collection through to storage and then
/// notifies subscribers, even when the targeted id did not exist. Lookup
/// misses are silent no-ops. If the write fails the error is returned and
/// the in-memory change stays applied.
pub struct EventStore<S: Storage> {
    events: Vec<Event>,
    ids: IdGenerator,
    persistence: Persistence<S>,
    reminder_days: i64,
    listeners: Vec<Listener>,
}

impl<S: Storage> EventStore<S> {
    /// Load the store from `storage`. Missing or corrupt data gives an empty store.
    pub fn open(storage: S) -> Self {
        let persistence = Persistence::new(storage);
        let events = persistence.load_all();

        let mut ids = IdGenerator::new();
        for event in &events {
            ids.observe(event.max_id());
        }

        log::debug!("Loaded {} events", events.len());

        EventStore {
            events,
            ids,
            persistence,
            reminder_days: DEFAULT_REMINDER_DAYS,
            listeners: Vec::new(),
        }
    }

    pub fn with_reminder_days(mut self, days: i64) -> Self {
        self.reminder_days = days;
        self
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, event_id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// Events coming up within the reminder window, counted from `today`.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Event> {
        reminder::upcoming(&self.events, today, self.reminder_days)
    }

    /// Events coming up within the reminder window, counted from the local date.
    pub fn reminders(&self) -> Vec<&Event> {
        self.upcoming(Local::now().date_naive())
    }

    pub fn reminder_days(&self) -> i64 {
        self.reminder_days
    }

    pub fn notes(&self, event_id: EventId) -> String {
        self.persistence.load_notes(event_id)
    }

    /// Register a callback run after every mutation with the new collection.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Event]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    /// Append a new event. The caller is expected to have validated `details`.
    pub fn create(&mut self, details: EventDetails) -> PlannerResult<EventId> {
        let id = EventId(self.ids.next_id());

        self.events.push(Event {
            id,
            title: details.title,
            date: details.date,
            location: details.location,
            budget: coerce_amount(&details.budget),
            spent: 0.0,
            guests: Vec::new(),
            tasks: Vec::new(),
            expenses: Vec::new(),
        });
        log::debug!("Created event {}", id);

        self.commit()?;
        Ok(id)
    }

    /// Replace title, date, location and budget of an event.
    /// Returns false if there is no such event.
    pub fn update(&mut self, event_id: EventId, details: EventDetails) -> PlannerResult<bool> {
        let found = match self.event_mut(event_id) {
            Some(event) => {
                event.title = details.title;
                event.date = details.date;
                event.location = details.location;
                event.budget = coerce_amount(&details.budget);
                true
            }
            None => false,
        };
        log::debug!("Update event {} (found: {})", event_id, found);

        self.commit()?;
        Ok(found)
    }

    /// Remove an event with everything nested in it, and its notes.
    /// Returns false if there is no such event.
    pub fn delete(&mut self, event_id: EventId) -> PlannerResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != event_id);
        let removed = self.events.len() != before;
        log::debug!("Delete event {} (found: {})", event_id, removed);

        self.commit()?;
        if removed {
            self.persistence.clear_notes(event_id)?;
        }
        Ok(removed)
    }

    // =========================================================================
    // Nested collections
    // =========================================================================

    pub fn add_guest(
        &mut self,
        event_id: EventId,
        name: &str,
        email: Option<&str>,
    ) -> PlannerResult<Option<GuestId>> {
        let id = GuestId(self.ids.next_id());
        let added = self.event_mut(event_id).map(|event| {
            event.guests.push(Guest {
                id,
                name: name.to_string(),
                email: email.map(str::to_string),
            });
            id
        });
        log::debug!("Add guest to event {}: {:?}", event_id, added);

        self.commit()?;
        Ok(added)
    }

    /// Returns false if the event or the guest does not exist.
    pub fn remove_guest(&mut self, event_id: EventId, guest_id: GuestId) -> PlannerResult<bool> {
        let removed = self.event_mut(event_id).is_some_and(|event| {
            let before = event.guests.len();
            event.guests.retain(|g| g.id != guest_id);
            event.guests.len() != before
        });
        log::debug!(
            "Remove guest {} from event {} (found: {})",
            guest_id,
            event_id,
            removed
        );

        self.commit()?;
        Ok(removed)
    }

    pub fn add_task(
        &mut self,
        event_id: EventId,
        description: &str,
        due_date: Option<NaiveDate>,
    ) -> PlannerResult<Option<TaskId>> {
        let id = TaskId(self.ids.next_id());
        let added = self.event_mut(event_id).map(|event| {
            event.tasks.push(Task {
                id,
                description: description.to_string(),
                due_date,
                completed: false,
            });
            id
        });
        log::debug!("Add task to event {}: {:?}", event_id, added);

        self.commit()?;
        Ok(added)
    }

    /// Flip a task's completion. Returns the new state, or None on a miss.
    pub fn toggle_task_completion(
        &mut self,
        event_id: EventId,
        task_id: TaskId,
    ) -> PlannerResult<Option<bool>> {
        let toggled = self
            .event_mut(event_id)
            .and_then(|event| event.tasks.iter_mut().find(|t| t.id == task_id))
            .map(|task| {
                task.completed = !task.completed;
                task.completed
            });
        log::debug!("Toggle task {} of event {}: {:?}", task_id, event_id, toggled);

        self.commit()?;
        Ok(toggled)
    }

    /// Record an expense and add its coerced amount to the event's `spent`.
    pub fn add_expense(
        &mut self,
        event_id: EventId,
        description: &str,
        amount: &str,
    ) -> PlannerResult<Option<ExpenseId>> {
        let id = ExpenseId(self.ids.next_id());
        let amount = coerce_amount(amount);
        let added = self.event_mut(event_id).map(|event| {
            event.expenses.push(Expense {
                id,
                description: description.to_string(),
                amount,
            });
            // No removal exists, so incrementing keeps spent == sum(amounts).
            event.spent += amount;
            id
        });
        log::debug!("Add expense of {} to event {}: {:?}", amount, event_id, added);

        self.commit()?;
        Ok(added)
    }

    // =========================================================================
    // Notes
    // =========================================================================

    /// Overwrite the notes for an event. Notes are stored apart from the
    /// event record and do not notify subscribers.
    pub fn save_notes(&mut self, event_id: EventId, text: &str) -> PlannerResult<()> {
        self.persistence.save_notes(event_id, text)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn event_mut(&mut self, event_id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == event_id)
    }

    fn commit(&mut self) -> PlannerResult<()> {
        self.persistence.save_all(&self.events)?;

        for listener in self.listeners.iter_mut() {
            listener(&self.events);
        }
        Ok(())
    }
}
