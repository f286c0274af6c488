//! CLI for the linkbox bookmark list manager.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkbox_core::config;
use linkbox_core::manager::BookmarkManager;
use linkbox_core::store::BookmarkStore;

use commands::{run_add, run_list, run_path, run_remove};

/// Top-level CLI for the linkbox bookmark list manager.
#[derive(Debug, Parser)]
#[command(name = "linkbox")]
#[command(about = "linkbox: save, list, and remove bookmarked links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Save a URL to the bookmark list.
    Add {
        /// URL or bare host to bookmark (bare hosts get https://).
        url: String,

        /// Attempt a remote page-title lookup for the new bookmark.
        #[arg(long)]
        title: bool,
    },

    /// Remove a bookmark by its position (as shown by `list`).
    Remove {
        /// 1-based list position.
        position: usize,
    },

    /// Show all bookmarks in order.
    List {
        /// Attempt remote page-title lookups for every row.
        #[arg(long)]
        titles: bool,
    },

    /// Print the location of the bookmark store file.
    Path,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        // The list is restored from storage exactly once per invocation.
        let mut manager = BookmarkManager::restore(BookmarkStore::open_default()?);

        match cli.command {
            CliCommand::Add { url, title } => run_add(&mut manager, &cfg, &url, title).await?,
            CliCommand::Remove { position } => run_remove(&mut manager, position)?,
            CliCommand::List { titles } => run_list(&mut manager, &cfg, titles).await?,
            CliCommand::Path => run_path(&manager),
        }

        Ok(())
    }
}
