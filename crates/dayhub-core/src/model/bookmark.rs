use serde::{Deserialize, Serialize};

/// Category of bookmark for grouping in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkCategory {
    Ebook,
    Video,
    Photo,
    Web,
    Health,
    Learning,
}

impl BookmarkCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BookmarkCategory::Ebook => "E-books",
            BookmarkCategory::Video => "Video",
            BookmarkCategory::Photo => "Photo",
            BookmarkCategory::Web => "Web",
            BookmarkCategory::Health => "Health",
            BookmarkCategory::Learning => "Learning",
        }
    }
}

/// A saved link. `click_count` orders bookmarks by how often they are opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: BookmarkCategory,
    #[serde(default)]
    pub click_count: u64,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>, category: BookmarkCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            url: url.into(),
            category,
            click_count: 0,
        }
    }

    /// Record one open of this bookmark.
    pub fn record_click(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_serialization() {
        let bm = Bookmark::new("Search", "https://example.com", BookmarkCategory::Web);
        let json = serde_json::to_string(&bm).unwrap();
        let decoded: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, bm.id);
        assert_eq!(decoded.click_count, 0);
    }

    #[test]
    fn record_click_increments() {
        let mut bm = Bookmark::new("Search", "https://example.com", BookmarkCategory::Web);
        bm.record_click();
        bm.record_click();
        assert_eq!(bm.click_count, 2);
    }
}
