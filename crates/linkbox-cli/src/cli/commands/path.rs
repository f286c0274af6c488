//! `linkbox path` – print the store file location.

use linkbox_core::manager::BookmarkManager;

pub fn run_path(manager: &BookmarkManager) {
    println!("{}", manager.store().path().display());
}
