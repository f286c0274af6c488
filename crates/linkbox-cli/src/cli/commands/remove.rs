//! `linkbox remove <position>` – delete one bookmark.

use anyhow::Result;
use linkbox_core::manager::BookmarkManager;

/// Removes exactly the bookmark at the 1-based `position` printed by `list`
/// and re-persists the remaining list.
pub fn run_remove(manager: &mut BookmarkManager, position: usize) -> Result<()> {
    let index = match position.checked_sub(1) {
        Some(i) => i,
        None => anyhow::bail!("positions start at 1"),
    };
    if index >= manager.list().len() {
        anyhow::bail!(
            "no bookmark at position {} ({} saved)",
            position,
            manager.list().len()
        );
    }
    let removed = manager.delete(index)?;
    println!("Removed {}: {} ({})", position, removed.label(), removed.url());
    Ok(())
}
