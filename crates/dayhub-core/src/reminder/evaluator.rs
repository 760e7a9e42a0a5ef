//! Pure firing decision for a single reminder task.

use chrono::{NaiveDateTime, Timelike};

use super::task::{ReminderTask, Trigger};

/// Decide whether `task` should fire at `now`.
///
/// Deterministic given the arguments; no registry knowledge — the caller is
/// responsible for suppressing tasks that have already fired.
///
/// To-do triggers compare hour and minute for equality and never look
/// backward or forward, so a poll coarser than one minute can skip the
/// matching tick and the to-do silently never fires that day. Event windows
/// exist precisely to avoid that failure mode; the asymmetry is intended.
pub fn evaluate(now: NaiveDateTime, task: &ReminderTask) -> bool {
    if !task.active {
        return false;
    }
    match task.trigger {
        Trigger::AtMinute(at) => {
            now.time().hour() == at.hour() && now.time().minute() == at.minute()
        }
        Trigger::Window { start, end } => start <= now && now < end,
    }
}
