//! The in-memory bookmark list.
//!
//! An explicit ordered list of bookmarks owned by the manager; rendering is a
//! projection of this list and persistence serializes it. Identity for
//! deletion is positional (duplicates are allowed and independently
//! deletable), while in-flight title lookups key on a process-local
//! [`BookmarkId`] so a late result for a deleted bookmark is discarded.

use crate::label::derive_label;

/// Process-local handle for one live bookmark. Monotonic per list, never
/// reused, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookmarkId(u64);

/// One saved URL plus its derived display label.
#[derive(Debug, Clone)]
pub struct Bookmark {
    id: BookmarkId,
    url: String,
    label: String,
}

impl Bookmark {
    pub fn id(&self) -> BookmarkId {
        self.id
    }

    /// Absolute, fully-qualified URL (always has a scheme).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current display label: hostname-derived, or a resolved remote title.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered bookmark list. Insertion order is display order.
#[derive(Debug, Default)]
pub struct BookmarkList {
    entries: Vec<Bookmark>,
    next_id: u64,
}

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bookmark for an already-normalized URL, deriving its label,
    /// and returns a snapshot of the new entry.
    pub fn push(&mut self, url: String) -> Bookmark {
        let id = BookmarkId(self.next_id);
        self.next_id += 1;
        let label = derive_label(&url);
        let bookmark = Bookmark { id, url, label };
        self.entries.push(bookmark.clone());
        bookmark
    }

    /// Removes and returns the bookmark at `index`, or `None` if out of range.
    /// Later entries shift down one position; relative order is preserved.
    pub fn remove(&mut self, index: usize) -> Option<Bookmark> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.entries.iter()
    }

    /// The ordered URL sequence: the unit of persistence. Labels are never
    /// part of it.
    pub fn urls(&self) -> Vec<String> {
        self.entries.iter().map(|b| b.url.clone()).collect()
    }

    /// Replaces the label of the bookmark with `id`, in place. Returns false
    /// (and changes nothing) if the bookmark was deleted meanwhile, so a
    /// late-arriving title lookup result becomes a silent no-op.
    pub fn set_label(&mut self, id: BookmarkId, label: String) -> bool {
        match self.entries.iter_mut().find(|b| b.id == id) {
            Some(b) => {
                b.label = label;
                true
            }
            None => false,
        }
    }
}
