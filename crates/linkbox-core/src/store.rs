//! Durable bookmark storage.
//!
//! One JSON document under the XDG state dir holding the ordered array of URL
//! strings. Every save is a total overwrite (no merge, no append), written to
//! a `.part` sibling first and atomically renamed into place. Loading is
//! deliberately tolerant: an absent, unreadable, or malformed file is an
//! empty list, never a fatal error.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the stored URL list inside the state dir.
const STORE_FILENAME: &str = "bookmarked_links.json";

/// Suffix for the temp file written before the atomic rename.
const TEMP_SUFFIX: &str = ".part";

/// Handle to the single persisted URL list.
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    /// Opens the store at `~/.local/state/linkbox/bookmarked_links.json`,
    /// creating the state dir if needed.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("linkbox")?;
        let state_dir = xdg_dirs.get_state_home();
        fs::create_dir_all(&state_dir)
            .with_context(|| format!("failed to create state dir {}", state_dir.display()))?;
        Ok(BookmarkStore {
            path: state_dir.join(STORE_FILENAME),
        })
    }

    /// Opens a store at an explicit path (tests, alternate profiles).
    pub fn at_path(path: PathBuf) -> Self {
        BookmarkStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored ordered URL sequence.
    ///
    /// A missing file is an empty list. Unreadable or malformed contents
    /// (not JSON, not an array, array of non-strings) also yield an empty
    /// list, logged at warn level rather than raised.
    pub fn load(&self) -> Vec<String> {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "could not read store: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&data) {
            Ok(urls) => urls,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "store contents are not a JSON array of strings, starting empty: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    /// Replaces the stored list with `urls`. Writes the JSON to a `.part`
    /// sibling and renames it over the store file, so readers never observe a
    /// half-written document.
    pub fn save(&self, urls: &[String]) -> Result<()> {
        let json = serde_json::to_string(urls).context("failed to encode URL list")?;
        let tmp = temp_path(&self.path);
        fs::write(&tmp, &json)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                tmp.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

/// Path for the temp file: appends `.part` to the store path.
fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}
