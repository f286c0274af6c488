//! CLI command handlers. Each command is in its own file.

mod add;
mod list;
mod path;
mod remove;

pub use add::run_add;
pub use list::run_list;
pub use path::run_path;
pub use remove::run_remove;
