//! External calendar collaborators.

use chrono::{Duration, Local, NaiveDate};

use super::types::{ExternalEvent, SyncError};

/// An external calendar provider.
///
/// Connection/authorization is the source's own precondition: `fetch_batch`
/// may assume `connect` succeeded, and the reconciler never sees a source at
/// all. Real providers (CalDAV, Google, ...) implement this trait out of
/// tree; the engine does not care how the batch is produced.
pub trait CalendarSource {
    /// Unique identifier (e.g. "sample", "google").
    fn name(&self) -> &str;

    /// Whether the user has connected/authorized this source.
    fn is_connected(&self) -> bool;

    /// Establish the connection. Interactive sources may prompt here.
    fn connect(&mut self) -> Result<(), SyncError>;

    /// Fetch the current batch of upcoming events.
    fn fetch_batch(&mut self) -> Result<Vec<ExternalEvent>, SyncError>;
}

/// Built-in stand-in source that serves a fixed pair of upcoming events.
///
/// Useful for trying the sync flow without any provider credentials; the
/// batch is anchored to a base date so the events always land in the near
/// future.
#[derive(Debug, Clone)]
pub struct SampleCalendarSource {
    base_date: NaiveDate,
    connected: bool,
}

impl SampleCalendarSource {
    pub fn new() -> Self {
        Self::anchored_at(Local::now().date_naive())
    }

    /// Anchor the sample batch to a specific day.
    pub fn anchored_at(base_date: NaiveDate) -> Self {
        Self {
            base_date,
            connected: false,
        }
    }
}

impl Default for SampleCalendarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarSource for SampleCalendarSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> Result<(), SyncError> {
        self.connected = true;
        Ok(())
    }

    fn fetch_batch(&mut self) -> Result<Vec<ExternalEvent>, SyncError> {
        if !self.connected {
            return Err(SyncError::NotConnected);
        }
        Ok(vec![
            ExternalEvent {
                title: "Team video call".to_string(),
                date: self.base_date + Duration::days(1),
                time: "09:00".to_string(),
                person: "Marketing team".to_string(),
                link: "https://meet.example.com/xyz-abcd-qrs".to_string(),
                phone: String::new(),
                location: "Video call".to_string(),
            },
            ExternalEvent {
                title: "Design thinking workshop".to_string(),
                date: self.base_date + Duration::days(3),
                time: "11:00".to_string(),
                person: "Jan Kowalski".to_string(),
                link: String::new(),
                phone: String::new(),
                location: "Downtown office".to_string(),
            },
        ])
    }
}
