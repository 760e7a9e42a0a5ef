//! Bookmark management commands.

use clap::Subcommand;
use dayhub_core::model::{Bookmark, BookmarkCategory};
use dayhub_core::store::Store;

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// Add a bookmark
    Add {
        /// Display title
        title: String,
        /// Target URL
        url: String,
        /// Category: ebook, video, photo, web, health, learning (default: web)
        #[arg(long, default_value = "web")]
        category: String,
    },
    /// List bookmarks, most-opened first
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Open a bookmark in the default browser
    Open {
        /// Bookmark ID
        id: String,
    },
    /// Delete a bookmark
    Delete {
        /// Bookmark ID
        id: String,
    },
}

fn parse_category(value: &str) -> Result<BookmarkCategory, Box<dyn std::error::Error>> {
    match value {
        "ebook" => Ok(BookmarkCategory::Ebook),
        "video" => Ok(BookmarkCategory::Video),
        "photo" => Ok(BookmarkCategory::Photo),
        "web" => Ok(BookmarkCategory::Web),
        "health" => Ok(BookmarkCategory::Health),
        "learning" => Ok(BookmarkCategory::Learning),
        other => Err(format!(
            "unknown category '{other}' (ebook, video, photo, web, health, learning)"
        )
        .into()),
    }
}

pub fn run(action: BookmarkAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut document = store.load()?;

    match action {
        BookmarkAction::Add {
            title,
            url,
            category,
        } => {
            let bookmark = Bookmark::new(title, url, parse_category(&category)?);
            println!("Bookmark created: {}", bookmark.id);
            document.bookmarks.push(bookmark);
            store.save(&document)?;
        }
        BookmarkAction::List { json } => {
            let mut bookmarks = document.bookmarks;
            bookmarks.sort_by(|a, b| b.click_count.cmp(&a.click_count));
            if json {
                println!("{}", serde_json::to_string_pretty(&bookmarks)?);
            } else {
                for bm in &bookmarks {
                    println!(
                        "{}  {:10}  {}  {} ({} opens)",
                        bm.id,
                        bm.category.label(),
                        bm.title,
                        bm.url,
                        bm.click_count
                    );
                }
            }
        }
        BookmarkAction::Open { id } => {
            let bookmark = document
                .bookmarks
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or_else(|| format!("no bookmark with id {id}"))?;
            open::that_detached(&bookmark.url)?;
            bookmark.record_click();
            let url = bookmark.url.clone();
            store.save(&document)?;
            println!("Opened {url}");
        }
        BookmarkAction::Delete { id } => {
            let before = document.bookmarks.len();
            document.bookmarks.retain(|b| b.id != id);
            if document.bookmarks.len() == before {
                return Err(format!("no bookmark with id {id}").into());
            }
            store.save(&document)?;
            println!("Bookmark deleted: {id}");
        }
    }

    Ok(())
}
