//! # Dayhub Core Library
//!
//! Core business logic for the Dayhub personal dashboard. All operations
//! are available through this library; the CLI binary is a thin surface
//! over it.
//!
//! ## Architecture
//!
//! - **Model**: bookmarks, to-dos, and calendar events, serialized as one
//!   JSON document
//! - **Reminder engine**: a polling scheduler that derives an evaluable task
//!   per reminder-bearing item each tick and dispatches newly-due reminders
//!   exactly once per activation
//! - **Sync**: replace-the-external-subset reconciliation of batches fetched
//!   from a [`CalendarSource`]
//! - **Store**: JSON document persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`ReminderScheduler`]: per-tick orchestration over the collections
//! - [`FiredRegistry`]: session-scoped at-most-once firing record
//! - [`SyncEngine`]: fetch-and-reconcile against one calendar source
//! - [`Store`] / [`Config`]: persistence

pub mod error;
pub mod model;
pub mod reminder;
pub mod store;
pub mod sync;

pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use model::{
    sort_todos, Bookmark, BookmarkCategory, CalendarEvent, Todo, TodoCategory, TodoSort,
};
pub use reminder::{
    DesktopDispatcher, Dispatcher, FiredRegistry, ReminderScheduler, ReminderTask, TickReport,
};
pub use store::{Config, HubDocument, Store};
pub use sync::{CalendarSource, ExternalEvent, SampleCalendarSource, SyncEngine, SyncError};
