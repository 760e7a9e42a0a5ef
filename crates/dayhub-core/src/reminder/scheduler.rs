//! Per-tick orchestration: snapshot -> evaluate -> dispatch -> record.

use chrono::NaiveDateTime;

use crate::model::{CalendarEvent, Todo};

use super::dispatcher::Dispatcher;
use super::evaluator::evaluate;
use super::registry::FiredRegistry;
use super::task::ReminderTask;

/// What one tick did, for logging and tests.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Reminder tasks derived and evaluated this tick.
    pub evaluated: usize,
    /// Ids dispatched this tick, in evaluation order.
    pub fired: Vec<String>,
    /// Fired records dropped because the owning to-do's reminder was off.
    pub cleared: Vec<String>,
}

impl TickReport {
    pub fn fired_any(&self) -> bool {
        !self.fired.is_empty()
    }
}

/// Polls the item collections and fires each due reminder exactly once.
///
/// The scheduler owns the [`FiredRegistry`] and is its only mutator. It does
/// not own the collections: the caller passes a read snapshot per tick, the
/// way the store currently sees them. Firing bookkeeping is internal and is
/// never written back to the items.
pub struct ReminderScheduler<D: Dispatcher> {
    registry: FiredRegistry,
    dispatcher: D,
}

impl<D: Dispatcher> ReminderScheduler<D> {
    pub fn new(dispatcher: D) -> Self {
        Self {
            registry: FiredRegistry::new(),
            dispatcher,
        }
    }

    pub fn registry(&self) -> &FiredRegistry {
        &self.registry
    }

    /// Run one evaluation pass at wall-clock `now`.
    ///
    /// Each item's decision is independent: a dispatch for one item never
    /// prevents evaluation of the rest, and nothing here can fail the tick.
    pub fn tick(
        &mut self,
        now: NaiveDateTime,
        todos: &[Todo],
        events: &[CalendarEvent],
    ) -> TickReport {
        let mut report = TickReport::default();

        // A disabled to-do reminder forfeits its firing record, so turning
        // it back on arms the reminder again.
        for todo in todos.iter().filter(|t| !t.remind_me) {
            if self.registry.has_fired(&todo.id) {
                self.registry.clear(&todo.id);
                report.cleared.push(todo.id.clone());
            }
        }

        let tasks = todos
            .iter()
            .filter_map(ReminderTask::from_todo)
            .chain(events.iter().filter_map(ReminderTask::from_event));

        for task in tasks {
            report.evaluated += 1;
            if self.registry.has_fired(&task.id) {
                continue;
            }
            if evaluate(now, &task) {
                self.dispatcher.dispatch(&task);
                self.registry.mark_fired(&task.id);
                report.fired.push(task.id.clone());
            }
        }

        report
    }
}
