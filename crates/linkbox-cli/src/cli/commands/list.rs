//! `linkbox list` – render all bookmarks in order.

use anyhow::Result;
use linkbox_core::config::{LinkboxConfig, TitleSource};
use linkbox_core::manager::BookmarkManager;
use linkbox_core::title::TitleLookup;

/// Prints one row per bookmark: position, label, URL.
///
/// With the remote title policy (config or `--titles`), one lookup task per
/// row runs concurrently on the blocking pool; each failure falls back to
/// that row's hostname-derived label without affecting the others. Resolved
/// titles update the live list only and are never persisted.
pub async fn run_list(
    manager: &mut BookmarkManager,
    cfg: &LinkboxConfig,
    titles: bool,
) -> Result<()> {
    if manager.list().is_empty() {
        println!("No bookmarks saved.");
        return Ok(());
    }

    let want_titles = titles || cfg.title_source == TitleSource::Remote;
    if want_titles {
        let mut lookups = Vec::with_capacity(manager.list().len());
        for bookmark in manager.list().iter() {
            let lookup = TitleLookup::from_config(cfg);
            let url = bookmark.url().to_string();
            let id = bookmark.id();
            lookups.push((
                id,
                tokio::task::spawn_blocking(move || lookup.resolve_label(&url)),
            ));
        }
        for (id, handle) in lookups {
            // A panicked lookup task just leaves the hostname label in place.
            if let Ok(label) = handle.await {
                manager.apply_title(id, label);
            }
        }
    }

    println!("{:<4} {:<40} {}", "POS", "TITLE", "URL");
    for (i, bookmark) in manager.list().iter().enumerate() {
        println!("{:<4} {:<40} {}", i + 1, bookmark.label(), bookmark.url());
    }
    Ok(())
}
