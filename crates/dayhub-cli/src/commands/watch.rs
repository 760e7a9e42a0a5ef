//! Reminder polling loop.
//!
//! Reloads the document every tick so edits made by other commands are seen
//! without restarting, then hands the snapshot to the scheduler. Ctrl-c
//! stops the timer; in-flight notification/sound effects are detached and
//! finish (or fail) on their own.

use std::time::Duration;

use chrono::Local;
use dayhub_core::reminder::{DesktopDispatcher, ReminderScheduler};
use dayhub_core::store::{Config, Store};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    if !config.reminders.enabled {
        println!("Reminders are disabled in the configuration.");
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch_loop(config))
}

async fn watch_loop(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let dispatcher = DesktopDispatcher::new(config.reminders.default_sound.clone());
    let mut scheduler = ReminderScheduler::new(dispatcher);

    let poll = Duration::from_secs(config.reminders.poll_secs.max(1));
    let mut interval = tokio::time::interval(poll);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    println!(
        "Watching reminders every {}s (ctrl-c to stop)",
        poll.as_secs()
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let document = match store.load() {
                    Ok(doc) => doc,
                    Err(err) => {
                        // One bad read must not stop the loop.
                        tracing::warn!(%err, "could not load document this tick");
                        continue;
                    }
                };
                let now = Local::now().naive_local();
                let report = scheduler.tick(now, &document.todos, &document.events);
                for id in &report.fired {
                    tracing::info!(%id, "dispatched reminder");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("Stopping reminder watch.");
                return Ok(());
            }
        }
    }
}
