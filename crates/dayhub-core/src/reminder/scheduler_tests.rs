//! Tests for the reminder scheduler.

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{CalendarEvent, Todo, TodoCategory};
use crate::reminder::dispatcher::Dispatcher;
use crate::reminder::scheduler::ReminderScheduler;
use crate::reminder::task::ReminderTask;

/// Records dispatched ids instead of touching the desktop.
#[derive(Clone, Default)]
struct RecordingDispatcher {
    dispatched: Arc<Mutex<Vec<String>>>,
}

impl RecordingDispatcher {
    fn ids(&self) -> Vec<String> {
        self.dispatched.lock().unwrap().clone()
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, task: &ReminderTask) {
        self.dispatched.lock().unwrap().push(task.id.clone());
    }
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn reminder_todo(text: &str, time: &str) -> Todo {
    let mut todo = Todo::new(text, TodoCategory::Today);
    todo.set_reminder(time);
    todo
}

fn reminder_event(title: &str, time: &str, lead_minutes: i64) -> CalendarEvent {
    let mut event = CalendarEvent::new(title, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(), time);
    event.remind_me = true;
    event.reminder_minutes = Some(lead_minutes);
    event
}

fn scheduler() -> (ReminderScheduler<RecordingDispatcher>, RecordingDispatcher) {
    let dispatcher = RecordingDispatcher::default();
    (ReminderScheduler::new(dispatcher.clone()), dispatcher)
}

#[test]
fn todo_fires_at_most_once_across_ticks() {
    let (mut scheduler, dispatcher) = scheduler();
    let todos = vec![reminder_todo("Stretch", "08:30")];

    let report = scheduler.tick(at(8, 30), &todos, &[]);
    assert_eq!(report.fired, vec![todos[0].id.clone()]);

    // Same minute, later tick: suppressed by the registry.
    let report = scheduler.tick(at(8, 30), &todos, &[]);
    assert!(report.fired.is_empty());
    assert_eq!(dispatcher.ids().len(), 1);
}

#[test]
fn event_fires_once_anywhere_in_window() {
    let (mut scheduler, dispatcher) = scheduler();
    let events = vec![reminder_event("Checkup", "10:00", 15)];

    // Before the window opens.
    assert!(scheduler.tick(at(9, 44), &[], &events).fired.is_empty());
    // First tick inside the window fires.
    assert_eq!(scheduler.tick(at(9, 45), &[], &events).fired.len(), 1);
    // Still inside: already fired.
    assert!(scheduler.tick(at(10, 29), &[], &events).fired.is_empty());
    assert_eq!(dispatcher.ids().len(), 1);
}

#[test]
fn event_enabled_after_trigger_still_fires_inside_window() {
    let (mut scheduler, _) = scheduler();
    let events = vec![reminder_event("Checkup", "10:00", 15)];

    // First tick the scheduler ever sees is well past the trigger instant
    // but before the window closes.
    let report = scheduler.tick(at(10, 20), &[], &events);
    assert_eq!(report.fired.len(), 1);
}

#[test]
fn event_past_window_is_abandoned() {
    let (mut scheduler, dispatcher) = scheduler();
    let events = vec![reminder_event("Checkup", "10:00", 15)];

    let report = scheduler.tick(at(10, 30), &[], &events);
    assert!(report.fired.is_empty());
    assert!(dispatcher.ids().is_empty());
}

#[test]
fn completed_todo_never_fires() {
    let (mut scheduler, _) = scheduler();
    let mut todo = reminder_todo("Stretch", "08:30");
    todo.completed = true;

    let report = scheduler.tick(at(8, 30), &[todo], &[]);
    assert_eq!(report.evaluated, 1);
    assert!(report.fired.is_empty());
}

#[test]
fn disabling_reminder_clears_fired_record_and_reenable_refires() {
    let (mut scheduler, dispatcher) = scheduler();
    let mut todo = reminder_todo("Stretch", "08:30");

    scheduler.tick(at(8, 30), &[todo.clone()], &[]);
    assert_eq!(dispatcher.ids().len(), 1);

    // User turns the reminder off; the next tick observes that and forgets
    // the firing record.
    todo.clear_reminder();
    let report = scheduler.tick(at(8, 30), &[todo.clone()], &[]);
    assert_eq!(report.cleared, vec![todo.id.clone()]);
    assert!(!scheduler.registry().has_fired(&todo.id));

    // Re-enabled at the same minute: fires again.
    todo.set_reminder("08:30");
    let report = scheduler.tick(at(8, 30), &[todo], &[]);
    assert_eq!(report.fired.len(), 1);
    assert_eq!(dispatcher.ids().len(), 2);
}

#[test]
fn items_fire_independently_in_one_tick() {
    let (mut scheduler, dispatcher) = scheduler();
    let todos = vec![reminder_todo("Stretch", "10:00"), reminder_todo("Hydrate", "10:00")];
    let events = vec![reminder_event("Checkup", "10:00", 0)];

    let report = scheduler.tick(at(10, 0), &todos, &events);
    assert_eq!(report.evaluated, 3);
    assert_eq!(report.fired.len(), 3);
    assert_eq!(dispatcher.ids().len(), 3);
}

#[test]
fn todo_minute_already_passed_does_not_fire() {
    let (mut scheduler, _) = scheduler();
    let todos = vec![reminder_todo("Stretch", "08:30")];

    // Poll lands after the minute: exact matching never looks backward.
    let report = scheduler.tick(at(8, 31), &todos, &[]);
    assert!(report.fired.is_empty());
}

#[test]
fn unparseable_reminder_times_are_skipped_not_fatal() {
    let (mut scheduler, dispatcher) = scheduler();
    let mut broken = Todo::new("Broken", TodoCategory::Today);
    broken.set_reminder("later");
    let good = reminder_todo("Stretch", "08:30");

    let report = scheduler.tick(at(8, 30), &[broken, good], &[]);
    assert_eq!(report.evaluated, 1);
    assert_eq!(report.fired.len(), 1);
    assert_eq!(dispatcher.ids().len(), 1);
}
