pub mod config;
pub mod logging;

pub mod label;
pub mod list;
pub mod manager;
pub mod store;
pub mod title;
pub mod url_norm;
