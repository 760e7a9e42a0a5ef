//! Single-document JSON store for the dashboard collections.
//!
//! The whole dashboard state is one serializable value. Saving rewrites the
//! file; readers of a loaded document never observe a partial sync, because
//! reconciliation produces a new event collection that replaces the old one
//! in a single assignment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{Bookmark, BookmarkCategory, CalendarEvent, Todo};

use super::data_dir;

const DOCUMENT_FILE: &str = "hub.json";

/// All stored dashboard state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubDocument {
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl HubDocument {
    /// A fresh document with the starter bookmarks.
    pub fn seeded() -> Self {
        Self {
            bookmarks: vec![
                Bookmark::new("Google", "https://google.com", BookmarkCategory::Web),
                Bookmark::new("YouTube", "https://youtube.com", BookmarkCategory::Video),
                Bookmark::new("GitHub", "https://github.com", BookmarkCategory::Learning),
                Bookmark::new("ChatGPT", "https://chat.openai.com", BookmarkCategory::Learning),
                Bookmark::new("Canva", "https://canva.com", BookmarkCategory::Photo),
                Bookmark::new("Facebook", "https://facebook.com", BookmarkCategory::Web),
            ],
            todos: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// Loads and saves the [`HubDocument`].
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Store at the default data directory.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self {
            path: data_dir()?.join(DOCUMENT_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, seeding a fresh one when the file is absent.
    pub fn load(&self) -> Result<HubDocument, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::ParseFailed {
                    path: self.path.clone(),
                    source,
                })
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HubDocument::seeded()),
            Err(source) => Err(StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Persist the document.
    pub fn save(&self, document: &HubDocument) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(document).map_err(|source| {
            StoreError::ParseFailed {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}
