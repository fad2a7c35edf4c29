// SPDX-License-Identifier: MPL-2.0
//! Synchronous key-value preference storage.
//!
//! [`PreferenceStore`] is the only persistence seam the localization service
//! depends on. Two backends are provided:
//!
//! - [`FileStore`] keeps values in the `[preferences]` table of `settings.toml`
//! - [`MemoryStore`] keeps values in process memory (tests, ephemeral sessions)

use crate::config::{self, Config};
use crate::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Read/write access to string preferences by string key.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

// =============================================================================
// FileStore
// =============================================================================

/// Preference store backed by a `settings.toml` file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Uses the file at `path` directly.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `settings.toml` inside the resolved config directory.
    ///
    /// Returns `None` if no config directory can be determined.
    pub fn in_config_dir(base_dir: Option<PathBuf>) -> Option<Self> {
        config::get_config_path_with_override(base_dir).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let config = config::load_from_path(&self.path)?;
        Ok(config.preference(key).map(str::to_owned))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // An unreadable file is replaced rather than blocking the write.
        let mut config = if self.path.exists() {
            config::load_from_path(&self.path).unwrap_or_else(|err| {
                tracing::warn!("replacing unreadable {}: {err}", self.path.display());
                Config::default()
            })
        } else {
            Config::default()
        };
        config
            .preferences
            .insert(key.to_string(), value.to_string());
        config::save_to_path(&config, &self.path)
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// Preference store kept entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
