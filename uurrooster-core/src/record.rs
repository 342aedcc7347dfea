//! JSON wire representation of schedule events.
//!
//! The fixture stores dates as `YYYY-MM-DDTHH:MM:SS` strings without a
//! timezone and the category as a free-form label. Conversion into `Event`
//! is lossy for every label other than "academic".

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{UurroosterError, UurroosterResult};
use crate::event::{Event, EventType};

/// Date/time format used by the fixture
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// An event as stored in the JSON fixture.
///
/// Every key is required except `location`, which may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub all_day: bool,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub start_date_time: String,
    pub end_date_time: String,
}

impl EventRecord {
    /// Convert into the domain representation.
    pub fn to_event(&self) -> UurroosterResult<Event> {
        Ok(Event {
            id: self.id.clone(),
            title: self.title.clone(),
            location: self.location.clone().unwrap_or_default(),
            all_day: self.all_day,
            start_date_time: parse_field("startDateTime", &self.start_date_time)?,
            end_date_time: parse_field("endDateTime", &self.end_date_time)?,
            event_type: EventType::from_label(&self.event_type),
        })
    }
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        EventRecord {
            id: event.id.clone(),
            all_day: event.all_day,
            title: event.title.clone(),
            location: (!event.location.is_empty()).then(|| event.location.clone()),
            event_type: event.event_type.label().to_string(),
            start_date_time: format_date_time(&event.start_date_time),
            end_date_time: format_date_time(&event.end_date_time),
        }
    }
}

/// Parse a fixture date string (`YYYY-MM-DDTHH:MM:SS`).
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT).ok()
}

pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

fn parse_field(field: &'static str, value: &str) -> UurroosterResult<NaiveDateTime> {
    parse_date_time(value).ok_or_else(|| UurroosterError::InvalidDateTime {
        field,
        value: value.to_string(),
    })
}

/// Parse the fixture body: a JSON array of records.
pub fn parse_records(json: &str) -> UurroosterResult<Vec<EventRecord>> {
    Ok(serde_json::from_str(json)?)
}
