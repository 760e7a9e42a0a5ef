//! Derived, evaluable view over a reminder-bearing item.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::model::{parse_time_of_day, CalendarEvent, Todo};

/// How long past the event start a missed reminder may still fire.
/// After this the firing is abandoned rather than delivered late.
pub const LATE_FIRE_GRACE_MINUTES: i64 = 30;

/// What kind of item a reminder task was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Todo,
    Event,
}

/// When a reminder task becomes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires on the tick whose wall clock matches this time of day to the
    /// minute. A poll coarser than one minute can skip the match entirely.
    AtMinute(NaiveTime),
    /// Fires on any tick inside `[start, end)`. Tolerates coarse polling.
    Window {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Snapshot of one item's reminder condition, ready to evaluate and dispatch.
///
/// Notification content is prepared here so the dispatcher needs no access
/// to the originating item.
#[derive(Debug, Clone)]
pub struct ReminderTask {
    pub id: String,
    pub kind: ReminderKind,
    pub trigger: Trigger,
    /// False while the owning item cannot fire (to-do completed, or
    /// `remind_me` unset).
    pub active: bool,
    pub title: String,
    pub body: String,
    /// Sound override; the dispatcher falls back to its default.
    pub sound: Option<String>,
}

impl ReminderTask {
    /// Derive the reminder task for a to-do.
    ///
    /// Returns `None` when the to-do has no evaluable reminder: `remind_me`
    /// unset, no time configured, or a time that does not parse as `HH:mm`.
    pub fn from_todo(todo: &Todo) -> Option<Self> {
        if !todo.remind_me {
            return None;
        }
        let raw = todo.reminder_time.as_deref()?;
        let time = match parse_time_of_day(raw) {
            Ok(t) => t,
            Err(err) => {
                tracing::warn!(id = %todo.id, %err, "skipping to-do with unparseable reminder time");
                return None;
            }
        };
        Some(Self {
            id: todo.id.clone(),
            kind: ReminderKind::Todo,
            trigger: Trigger::AtMinute(time),
            active: !todo.completed,
            title: format!("Task: {}", todo.text),
            body: format!("Due at {} on your {} list", raw, todo.category.label()),
            sound: None,
        })
    }

    /// Derive the reminder task for a calendar event.
    ///
    /// The window opens `reminder_minutes` before the event instant and
    /// closes [`LATE_FIRE_GRACE_MINUTES`] after it. A missing lead time
    /// means the window opens at the event instant itself.
    pub fn from_event(event: &CalendarEvent) -> Option<Self> {
        if !event.remind_me {
            return None;
        }
        let instant = match event.start_instant() {
            Some(i) => i,
            None => {
                tracing::warn!(id = %event.id, time = %event.time, "skipping event with unparseable start time");
                return None;
            }
        };
        let lead = Duration::minutes(event.reminder_minutes.unwrap_or(0));
        Some(Self {
            id: event.id.clone(),
            kind: ReminderKind::Event,
            trigger: Trigger::Window {
                start: instant - lead,
                end: instant + Duration::minutes(LATE_FIRE_GRACE_MINUTES),
            },
            active: true,
            title: format!("Reminder: {}", event.title),
            body: format!("{} - {}", event.time, event.location),
            sound: event.sound.clone(),
        })
    }
}
