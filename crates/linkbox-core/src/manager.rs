//! The bookmark list manager.
//!
//! Owns the in-memory list and the store, and keeps them in lockstep: every
//! mutation (add, delete) re-persists the full ordered URL list immediately.
//! Rendering reads from the list; nothing else holds state.

use crate::list::{Bookmark, BookmarkId, BookmarkList};
use crate::store::BookmarkStore;
use crate::url_norm::normalize_url;
use anyhow::Result;
use thiserror::Error;

/// User-facing failures of a list mutation.
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Empty or whitespace-only input submitted. No state change.
    #[error("please enter a URL")]
    EmptyInput,
    /// Delete aimed at a position that does not exist. No state change.
    #[error("no bookmark at index {0}")]
    NoSuchBookmark(usize),
    /// The store could not be written.
    #[error(transparent)]
    Persist(#[from] anyhow::Error),
}

/// Manager tying the [`BookmarkList`] to its [`BookmarkStore`].
#[derive(Debug)]
pub struct BookmarkManager {
    list: BookmarkList,
    store: BookmarkStore,
}

impl BookmarkManager {
    /// Rebuilds the list from storage, in stored order, re-deriving every
    /// label from scratch. Missing or malformed storage yields an empty list
    /// (see [`BookmarkStore::load`]). Runs once, at startup.
    pub fn restore(store: BookmarkStore) -> Self {
        let mut list = BookmarkList::new();
        for url in store.load() {
            list.push(url);
        }
        tracing::debug!(count = list.len(), "restored bookmark list");
        BookmarkManager { list, store }
    }

    /// Submits raw user input as a new bookmark.
    ///
    /// Trims, rejects empty input, normalizes to an absolute URL, appends in
    /// last position, and persists. All-or-nothing: if persisting fails the
    /// appended entry is rolled back, so the list is either fully extended or
    /// untouched. Returns a snapshot of the new bookmark.
    pub fn add(&mut self, raw: &str) -> Result<Bookmark, BookmarkError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BookmarkError::EmptyInput);
        }
        let url = normalize_url(trimmed);
        let added = self.list.push(url);
        if let Err(e) = self.persist() {
            let last = self.list.len() - 1;
            self.list.remove(last);
            return Err(BookmarkError::Persist(e));
        }
        tracing::info!(url = %added.url(), "added bookmark");
        Ok(added)
    }

    /// Removes exactly the bookmark at `index` (0-based, display order) and
    /// persists the remaining list. Out-of-range indices are rejected with no
    /// state change.
    pub fn delete(&mut self, index: usize) -> Result<Bookmark, BookmarkError> {
        let removed = self
            .list
            .remove(index)
            .ok_or(BookmarkError::NoSuchBookmark(index))?;
        self.persist()?;
        tracing::info!(url = %removed.url(), "removed bookmark");
        Ok(removed)
    }

    /// Applies a resolved remote title to the bookmark with `id`. Returns
    /// false if that bookmark was deleted while the lookup was in flight; the
    /// late result is then discarded. Titles are never persisted.
    pub fn apply_title(&mut self, id: BookmarkId, title: String) -> bool {
        let applied = self.list.set_label(id, title);
        if !applied {
            tracing::debug!("discarding title for deleted bookmark");
        }
        applied
    }

    /// Serializes the current ordered URL list to the store. Total overwrite
    /// semantics; labels are not part of the persisted state.
    pub fn persist(&self) -> Result<()> {
        self.store.save(&self.list.urls())
    }

    pub fn list(&self) -> &BookmarkList {
        &self.list
    }

    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }
}
