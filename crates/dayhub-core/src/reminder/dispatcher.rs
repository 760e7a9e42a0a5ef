//! Side-effecting sink for fired reminders.

use super::task::ReminderTask;

/// Delivers a fired reminder to the user.
///
/// Dispatch is fire-and-forget: implementations must not propagate failures
/// to the scheduler and must not block the tick loop.
pub trait Dispatcher {
    fn dispatch(&self, task: &ReminderTask);
}

/// Production dispatcher: plays the reminder sound and raises a desktop
/// notification.
///
/// The two effects are independent and best-effort — a blocked sound must
/// not suppress the notification and vice versa. Failures are logged and
/// swallowed; the host may legitimately refuse either (no audio handler, no
/// notification permission).
#[derive(Debug, Clone)]
pub struct DesktopDispatcher {
    default_sound: String,
}

impl DesktopDispatcher {
    pub fn new(default_sound: impl Into<String>) -> Self {
        Self {
            default_sound: default_sound.into(),
        }
    }

    fn play_sound(&self, task: &ReminderTask) {
        let sound = task.sound.as_deref().unwrap_or(&self.default_sound);
        if sound.is_empty() {
            return;
        }
        // Detached: the platform handler owns playback from here on.
        if let Err(err) = open::that_detached(sound) {
            tracing::debug!(id = %task.id, %sound, %err, "reminder sound could not be played");
        }
    }

    fn show_notification(&self, task: &ReminderTask) {
        let result = notify_rust::Notification::new()
            .summary(&task.title)
            .body(&task.body)
            .appname("dayhub")
            .show();
        if let Err(err) = result {
            tracing::debug!(id = %task.id, %err, "desktop notification could not be shown");
        }
    }
}

impl Dispatcher for DesktopDispatcher {
    fn dispatch(&self, task: &ReminderTask) {
        tracing::info!(id = %task.id, title = %task.title, "reminder fired");
        self.play_sound(task);
        self.show_notification(task);
    }
}
