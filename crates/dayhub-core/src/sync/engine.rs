//! Sync engine tying a calendar source to the reconciler.

use chrono::Utc;

use crate::model::CalendarEvent;

use super::reconciler::reconcile;
use super::source::CalendarSource;
use super::types::{SyncError, SyncStatus};

/// Runs sync passes against one calendar source.
///
/// `sync` produces a new event collection as a value; the owning store
/// replaces its collection with the result, so readers observe the swap
/// atomically without any locking here.
pub struct SyncEngine<S: CalendarSource> {
    source: S,
    status: SyncStatus,
}

impl<S: CalendarSource> SyncEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            status: SyncStatus::default(),
        }
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Fetch the current batch and merge it into `current`.
    ///
    /// Refuses with [`SyncError::NotConnected`] before touching the source
    /// when it is not connected; given a well-formed batch the merge itself
    /// cannot fail.
    pub fn sync(&mut self, current: &[CalendarEvent]) -> Result<Vec<CalendarEvent>, SyncError> {
        if !self.source.is_connected() {
            return Err(SyncError::NotConnected);
        }
        self.status.in_progress = true;
        let result = self.source.fetch_batch();
        self.status.in_progress = false;

        let batch = result?;
        let batch_len = batch.len();
        let merged = reconcile(current, batch);
        self.status.last_sync_at = Some(Utc::now());
        tracing::info!(
            source = %self.source.name(),
            fetched = batch_len,
            kept_local = merged.len() - batch_len,
            "calendar sync complete"
        );
        Ok(merged)
    }
}
