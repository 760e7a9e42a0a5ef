//! Stored dashboard data: bookmarks, to-dos, and calendar events.
//!
//! Times of day are kept as `HH:mm` strings in the stored model and parsed
//! with [`parse_time_of_day`] where evaluation needs a real `NaiveTime`.

mod bookmark;
mod event;
mod todo;

pub use bookmark::{Bookmark, BookmarkCategory};
pub use event::CalendarEvent;
pub use todo::{sort_todos, Todo, TodoCategory, TodoSort};

use chrono::NaiveTime;

use crate::error::ValidationError;

/// Parse a `HH:mm` time-of-day string.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ValidationError::InvalidTimeOfDay {
        value: value.to_string(),
    })
}
