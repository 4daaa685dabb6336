//! Self-documenting configuration engine for a game-server chat logger.
//!
//! The host loads one flat record of options from `config/config.json`,
//! repairs anything out of range, and writes the file back with banners and
//! per-field commentary generated from the schema metadata. Collaborators
//! (file sink, webhook sender, retention cleaner) read the published record
//! through `config::get()`.

pub mod config;
pub mod observability;

pub use config::loader::{ConfigError, ConfigResult, ConfigStore};
pub use config::schema::ConfigRecord;

/// Version written into the persisted document's `Version` field.
pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project home written into the persisted document's `Link` field.
pub const PROJECT_LINK: &str = "https://github.com/chat-logger/chat-logger";
