//! In-memory event store.
//!
//! The store owns the schedule and keeps it sorted by start time, most
//! recent first. Every operation except `load_data` is synchronous; mutating
//! methods take `&mut self`, so exclusive access is enforced by the borrow
//! checker. Use `service::StoreService` when several tasks share one store.

use tracing::{debug, error};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::UurroosterResult;
use crate::event::Event;

#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    config: StoreConfig,
}

impl EventStore {
    pub fn new(config: StoreConfig) -> Self {
        EventStore {
            events: Vec::new(),
            config,
        }
    }

    /// Events in display order (start time descending)
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add an event under a freshly generated id, overwriting any id it had.
    /// Returns the new id.
    pub fn add_event(&mut self, mut event: Event) -> String {
        let id = Uuid::new_v4().to_string();
        event.id = id.clone();
        self.events.push(event);
        self.sort();
        id
    }

    /// Copy every field but `id` onto the stored event with the same id.
    /// Returns false (and changes nothing) when no event matches.
    pub fn update_event(&mut self, event: &Event) -> bool {
        let mut matched = false;
        for stored in self.events.iter_mut().filter(|e| e.id == event.id) {
            stored.apply(event);
            matched = true;
        }
        if matched {
            self.sort();
        }
        matched
    }

    /// Remove every event with `id`. Returns how many were removed.
    ///
    /// Retaining keeps the relative order, so no re-sort is needed.
    pub fn delete_event(&mut self, id: &str) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        before - self.events.len()
    }

    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Lookup that never fails: a miss yields `Event::default()`.
    pub fn get_event_or_default(&self, id: &str) -> Event {
        self.get_event(id).cloned().unwrap_or_default()
    }

    /// Replace the whole schedule with the contents of the configured fixture.
    ///
    /// On failure the error is logged, the schedule is emptied and the error
    /// is returned. Callers that only care about the schedule can ignore it.
    pub async fn load_data(&mut self) -> UurroosterResult<usize> {
        let fixture = self.config.fixture();
        let delay = self.config.load_delay;

        if !delay.is_zero() {
            debug!(?delay, "Delaying schedule load");
            tokio::time::sleep(delay).await;
        }

        match fixture.load_events().await {
            Ok(events) => {
                self.events = events;
                self.sort();
                debug!(count = self.events.len(), %fixture, "Schedule loaded");
                Ok(self.events.len())
            }
            Err(e) => {
                error!(%fixture, "Failed to load schedule: {e}");
                self.events.clear();
                Err(e)
            }
        }
    }

    /// Stable sort, most recent start first
    fn sort(&mut self) {
        self.events
            .sort_by(|a, b| b.start_date_time.cmp(&a.start_date_time));
    }
}
