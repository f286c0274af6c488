//! `linkbox add <url>` – save a new bookmark.

use anyhow::Result;
use linkbox_core::config::{LinkboxConfig, TitleSource};
use linkbox_core::manager::BookmarkManager;
use linkbox_core::title::TitleLookup;

/// Adds the bookmark and prints the new row. With the remote title policy
/// (config or `--title`), a best-effort page-title lookup runs first; the
/// row is already persisted either way, so a failed lookup only affects the
/// printed label.
pub async fn run_add(
    manager: &mut BookmarkManager,
    cfg: &LinkboxConfig,
    url: &str,
    title: bool,
) -> Result<()> {
    let added = manager.add(url)?;

    let want_title = title || cfg.title_source == TitleSource::Remote;
    let label = if want_title {
        let lookup = TitleLookup::from_config(cfg);
        let target = added.url().to_string();
        let resolved = tokio::task::spawn_blocking(move || lookup.resolve_label(&target)).await?;
        manager.apply_title(added.id(), resolved.clone());
        resolved
    } else {
        added.label().to_string()
    };

    println!(
        "Added {}: {} ({})",
        manager.list().len(),
        label,
        added.url()
    );
    Ok(())
}
