//! Core types for calendar synchronization.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One event as delivered by an external calendar source.
///
/// Carries only schedule and display fields — the collaborator populates no
/// reminder settings, and any id it may use internally has no local meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEvent {
    pub title: String,
    pub date: NaiveDate,
    /// Start time of day in `HH:mm`.
    pub time: String,
    #[serde(default)]
    pub person: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

/// Current sync status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Last successful sync timestamp.
    pub last_sync_at: Option<DateTime<Utc>>,
    /// Whether a sync is currently in progress.
    pub in_progress: bool,
}

/// Sync error types.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The source has not been connected/authorized. Connection is the
    /// source's precondition; reconciliation itself cannot fail.
    #[error("Calendar source not connected")]
    NotConnected,

    #[error("Calendar source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_event_serialization() {
        let event = ExternalEvent {
            title: "Team call".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            time: "09:00".to_string(),
            person: "Marketing".to_string(),
            link: "https://meet.example.com/abc".to_string(),
            phone: String::new(),
            location: "Video".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let decoded: ExternalEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn sync_status_defaults_to_never_synced() {
        let status = SyncStatus::default();
        assert!(status.last_sync_at.is_none());
        assert!(!status.in_progress);
    }
}
