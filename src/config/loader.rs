//! Configuration loading and the shared record slot.
//!
//! `load` reads the document (or starts from defaults), repairs it, then
//! writes the annotated rendering back and publishes the record. It is
//! synchronous and re-entrant; the host calls it once at plugin activation
//! and again on an explicit hot reload.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use thiserror::Error;

use crate::config::codec::{decode, encode};
use crate::config::schema::ConfigRecord;
use crate::config::weaver::annotate;

const CONFIG_DIR_NAME: &str = "config";
const CONFIG_FILE_NAME: &str = "config.json";

/// Error type for configuration loading and access.
///
/// Range violations and malformed documents are not errors; the loader
/// repairs those silently. Only I/O failures and calling [`ConfigStore::get`]
/// before a load surface here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config directory could not be created.
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The annotated document could not be written back.
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `get` was called before any successful `load`.
    #[error("configuration not loaded yet")]
    NotLoaded,
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Holds the currently published configuration record.
///
/// `load` fully replaces the record rather than mutating it, so readers keep
/// whatever snapshot they already hold and pick up changes on their next
/// [`ConfigStore::get`]. One process-wide instance backs the free functions
/// in this module; tests and embedders can run their own.
pub struct ConfigStore {
    record: ArcSwapOption<ConfigRecord>,
}

impl ConfigStore {
    /// Create an empty store. [`ConfigStore::load`] must run before
    /// [`ConfigStore::get`] returns anything.
    pub const fn new() -> Self {
        Self {
            record: ArcSwapOption::const_empty(),
        }
    }

    /// Run one full load cycle and publish the result.
    ///
    /// The document lives at `<base_dir>/config/config.json`; the directory
    /// is created if missing. A missing or malformed document degrades to
    /// defaults. The annotated rendering is always written back, so the file
    /// on disk reflects any repairs and carries current documentation even
    /// if it was hand-edited without comments.
    pub fn load(&self, base_dir: &Path) -> ConfigResult<Arc<ConfigRecord>> {
        let config_dir = base_dir.join(CONFIG_DIR_NAME);
        fs::create_dir_all(&config_dir).map_err(|source| ConfigError::CreateDir {
            path: config_dir.clone(),
            source,
        })?;

        let path = config_dir.join(CONFIG_FILE_NAME);
        let mut record = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            decode(&text).unwrap_or_else(|| {
                tracing::warn!(
                    path = %path.display(),
                    "config file is not a valid document, falling back to defaults"
                );
                ConfigRecord::default()
            })
        } else {
            tracing::info!(path = %path.display(), "no config file found, writing defaults");
            ConfigRecord::default()
        };

        for diagnostic in record.validate() {
            tracing::warn!(field = diagnostic.field, "{}", diagnostic.message);
        }

        let annotated = annotate(&encode(&record));
        fs::write(&path, annotated).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;

        let record = Arc::new(record);
        self.record.store(Some(record.clone()));
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(record)
    }

    /// The currently published record.
    pub fn get(&self) -> ConfigResult<Arc<ConfigRecord>> {
        self.record.load_full().ok_or(ConfigError::NotLoaded)
    }

    /// Whether a record has been published yet.
    pub fn is_loaded(&self) -> bool {
        self.record.load().is_some()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_STORE: ConfigStore = ConfigStore::new();

/// Load into the process-wide store (plugin activation and hot reload).
pub fn load(base_dir: &Path) -> ConfigResult<Arc<ConfigRecord>> {
    GLOBAL_STORE.load(base_dir)
}

/// Record from the process-wide store.
pub fn get() -> ConfigResult<Arc<ConfigRecord>> {
    GLOBAL_STORE.get()
}

/// Whether the process-wide store has loaded.
pub fn is_loaded() -> bool {
    GLOBAL_STORE.is_loaded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_before_load_is_a_usage_error() {
        let store = ConfigStore::new();
        assert!(!store.is_loaded());
        assert!(matches!(store.get(), Err(ConfigError::NotLoaded)));
    }

    #[test]
    fn test_load_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new();

        let record = store.load(dir.path()).unwrap();

        let path = dir.path().join("config").join("config.json");
        assert!(path.is_file());
        assert!(store.is_loaded());
        assert_eq!(*record, ConfigRecord::default());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("config.json"), "{{{ nonsense").unwrap();

        let store = ConfigStore::new();
        let record = store.load(dir.path()).unwrap();

        assert_eq!(*record, ConfigRecord::default());
    }

    #[test]
    fn test_reload_replaces_the_published_record() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new();

        let first = store.load(dir.path()).unwrap();
        assert_eq!(first.locally_enable, 1);

        let path = dir.path().join("config").join("config.json");
        let edited = fs::read_to_string(&path)
            .unwrap()
            .replace("\"Locally_Enable\": 1", "\"Locally_Enable\": 2");
        fs::write(&path, edited).unwrap();

        let second = store.load(dir.path()).unwrap();
        assert_eq!(second.locally_enable, 2);
        // The first snapshot is untouched; only the slot moved on.
        assert_eq!(first.locally_enable, 1);
        assert_eq!(store.get().unwrap().locally_enable, 2);
    }

    #[test]
    fn test_blocked_config_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("config");
        fs::write(&blocker, "a file where the directory should go").unwrap();

        let store = ConfigStore::new();
        let err = store.load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::CreateDir { .. }));
    }
}
