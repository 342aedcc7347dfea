//! Schedule event types.
//!
//! These are the in-memory representation the store works with. The JSON
//! fixture uses `record::EventRecord` instead and is converted on load.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Category of a scheduled event.
///
/// Only "academic" is recognised by name; every other source label
/// collapses into `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Academic,
    Other,
}

impl EventType {
    pub const ACADEMIC_LABEL: &'static str = "academic";

    /// Numeric code (0 = academic, 1 = other)
    pub fn code(self) -> u8 {
        match self {
            EventType::Academic => 0,
            EventType::Other => 1,
        }
    }

    pub fn from_label(label: &str) -> Self {
        if label == Self::ACADEMIC_LABEL {
            EventType::Academic
        } else {
            EventType::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::Academic => Self::ACADEMIC_LABEL,
            EventType::Other => "other",
        }
    }
}

/// A scheduled item (class, activity, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    /// Assigned by the store on creation, never reassigned afterwards
    pub id: String,
    pub title: String,
    /// Empty when unknown
    pub location: String,
    pub all_day: bool,
    pub start_date_time: NaiveDateTime,
    /// Expected to be >= start for timed events (not enforced)
    pub end_date_time: NaiveDateTime,
    pub event_type: EventType,
}

impl Event {
    /// Create an event without an id. `EventStore::add_event` assigns one.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Event {
            title: title.into(),
            start_date_time: start,
            end_date_time: end,
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Copy every field except `id` from `other`.
    pub fn apply(&mut self, other: &Event) {
        self.event_type = other.event_type;
        self.all_day = other.all_day;
        self.end_date_time = other.end_date_time;
        self.location = other.location.clone();
        self.start_date_time = other.start_date_time;
        self.title = other.title.clone();
    }
}
