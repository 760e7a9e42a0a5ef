//! Merge an external batch into the local event collection.

use crate::model::CalendarEvent;

use super::types::ExternalEvent;

/// Replace the external subset of `current` with `batch`.
///
/// User-created events pass through untouched, in order. Every previously
/// synced external event is dropped, and every batch element becomes a new
/// local event with a fresh id and `is_external` forced true — including an
/// element identical to one from an earlier sync. Re-syncing the same batch
/// therefore yields new ids each time, which also discards any fired
/// reminder state keyed on the old ids. There is deliberately no id-based
/// matching against prior externals.
pub fn reconcile(current: &[CalendarEvent], batch: Vec<ExternalEvent>) -> Vec<CalendarEvent> {
    let mut merged: Vec<CalendarEvent> = current
        .iter()
        .filter(|e| !e.is_external)
        .cloned()
        .collect();
    merged.extend(batch.into_iter().map(adopt));
    merged
}

/// Turn a batch element into a locally-stored external event.
fn adopt(event: ExternalEvent) -> CalendarEvent {
    CalendarEvent {
        id: uuid::Uuid::new_v4().to_string(),
        title: event.title,
        date: event.date,
        time: event.time,
        person: event.person,
        link: event.link,
        phone: event.phone,
        location: event.location,
        description: String::new(),
        remind_me: false,
        reminder_minutes: None,
        sound: None,
        is_external: true,
    }
}
