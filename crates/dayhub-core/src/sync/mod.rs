//! External calendar synchronization.
//!
//! A sync pass fetches a batch of events from a [`CalendarSource`] and
//! reconciles it into the local event collection: user-created events are
//! left untouched, the previously-synced external subset is replaced
//! wholesale. There is no id matching against prior external events —
//! replace-not-merge is the pinned behavior (see [`reconciler::reconcile`]).

pub mod engine;
pub mod reconciler;
pub mod source;
pub mod types;

#[cfg(test)]
mod reconciler_tests;

pub use engine::SyncEngine;
pub use reconciler::reconcile;
pub use source::{CalendarSource, SampleCalendarSource};
pub use types::{ExternalEvent, SyncError, SyncStatus};
