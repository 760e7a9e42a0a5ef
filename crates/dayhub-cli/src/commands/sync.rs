//! Calendar sync command.

use dayhub_core::store::Store;
use dayhub_core::sync::{CalendarSource, SampleCalendarSource, SyncEngine};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut document = store.load()?;

    let previous_external = document.events.iter().filter(|e| e.is_external).count();
    let kept_local = document.events.len() - previous_external;

    let mut engine = SyncEngine::new(SampleCalendarSource::new());
    if !engine.source_mut().is_connected() {
        engine.source_mut().connect()?;
    }
    document.events = engine.sync(&document.events)?;
    store.save(&document)?;

    let fetched = document.events.len() - kept_local;
    println!(
        "Sync complete: {fetched} external event(s) fetched, {previous_external} replaced, {kept_local} local event(s) kept"
    );
    Ok(())
}
