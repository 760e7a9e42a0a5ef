//! Tests for the reconciler module.

use chrono::NaiveDate;
use proptest::prelude::*;

use crate::model::CalendarEvent;
use crate::sync::reconciler::reconcile;
use crate::sync::types::ExternalEvent;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn local_event(title: &str) -> CalendarEvent {
    CalendarEvent::new(title, day(), "12:00")
}

fn external_event(title: &str) -> CalendarEvent {
    let mut event = local_event(title);
    event.is_external = true;
    event
}

fn batch_event(title: &str) -> ExternalEvent {
    ExternalEvent {
        title: title.to_string(),
        date: day(),
        time: "09:00".to_string(),
        person: String::new(),
        link: String::new(),
        phone: String::new(),
        location: String::new(),
    }
}

#[test]
fn locals_survive_externals_are_replaced() {
    let local = local_event("A");
    let current = vec![local.clone(), external_event("B"), external_event("C")];

    let merged = reconcile(&current, vec![batch_event("D")]);

    let titles: Vec<_> = merged.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "D"]);

    // The surviving local is untouched, field for field.
    let kept = &merged[0];
    assert_eq!(kept.id, local.id);
    assert_eq!(kept.time, local.time);
    assert!(!kept.is_external);
}

#[test]
fn batch_events_are_always_tagged_external() {
    let merged = reconcile(&[], vec![batch_event("D"), batch_event("E")]);
    assert_eq!(merged.len(), 2);
    assert!(merged.iter().all(|e| e.is_external));
}

#[test]
fn batch_events_carry_no_reminder_settings() {
    let merged = reconcile(&[], vec![batch_event("D")]);
    assert!(!merged[0].remind_me);
    assert!(merged[0].reminder_minutes.is_none());
    assert!(merged[0].sound.is_none());
}

#[test]
fn empty_batch_drops_all_externals() {
    let current = vec![local_event("A"), external_event("B")];
    let merged = reconcile(&current, vec![]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].title, "A");
}

/// Re-syncing an identical batch mints fresh ids each pass: there is no
/// external-id matching, so a reappearing event is a new entity. Asserted
/// here on purpose so the behavior reads as intent, not as a bug.
#[test]
fn identical_batch_resync_yields_distinct_ids() {
    let batch = vec![batch_event("D")];

    let first = reconcile(&[], batch.clone());
    let second = reconcile(&first, batch);

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].title, second[0].title);
    assert_ne!(first[0].id, second[0].id);
}

proptest! {
    #[test]
    fn locals_always_pass_through_in_order(
        local_titles in prop::collection::vec("[a-z]{1,8}", 0..6),
        external_titles in prop::collection::vec("[a-z]{1,8}", 0..6),
        batch_titles in prop::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        let mut current: Vec<CalendarEvent> = Vec::new();
        for t in &local_titles {
            current.push(local_event(t));
        }
        for t in &external_titles {
            current.push(external_event(t));
        }
        let batch: Vec<ExternalEvent> = batch_titles.iter().map(|t| batch_event(t)).collect();

        let merged = reconcile(&current, batch);

        let kept_locals: Vec<_> = merged
            .iter()
            .filter(|e| !e.is_external)
            .map(|e| e.title.clone())
            .collect();
        prop_assert_eq!(kept_locals, local_titles.clone());

        let externals = merged.iter().filter(|e| e.is_external).count();
        prop_assert_eq!(externals, batch_titles.len());
        prop_assert_eq!(merged.len(), local_titles.len() + batch_titles.len());
    }
}
