use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::parse_time_of_day;

/// A calendar entry.
///
/// The union of events at any time partitions into user-created events
/// (`is_external == false`) and events that arrived through a sync batch
/// (`is_external == true`). Sync only ever replaces the external subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    /// Calendar day of the event.
    pub date: NaiveDate,
    /// Start time of day in `HH:mm`.
    pub time: String,
    #[serde(default)]
    pub person: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub remind_me: bool,
    /// Reminder lead time in minutes before the event.
    #[serde(default)]
    pub reminder_minutes: Option<i64>,
    /// Sound URL or path to play when the reminder fires.
    #[serde(default)]
    pub sound: Option<String>,
    /// True when the event came from a sync batch rather than user entry.
    #[serde(default)]
    pub is_external: bool,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            date,
            time: time.into(),
            person: String::new(),
            link: String::new(),
            phone: String::new(),
            location: String::new(),
            description: String::new(),
            remind_me: false,
            reminder_minutes: None,
            sound: None,
            is_external: false,
        }
    }

    /// The absolute wall-clock instant the event starts, if `time` parses.
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        let time = parse_time_of_day(&self.time).ok()?;
        Some(self.date.and_time(time))
    }
}
