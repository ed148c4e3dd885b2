//! Client-local key/value storage.
//!
//! Stands in for the browser's local storage: a flat string map that is read
//! once at startup and written on every change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_types::error::{FolioError, Result};

/// A persistent string-to-string map.
pub trait KeyValueStore {
    /// Read a value. Missing keys and unreadable backing data yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, persisting it before returning.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Ephemeral store for tests and sessions without a state file.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// The whole map is loaded on open and rewritten on each `set`. A corrupt
/// file is treated as empty; the next write replaces it.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read(&path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Ignoring unreadable state file {}: {e}", path.display());
                BTreeMap::new()
            },
        };
        Self { path, entries }
    }

    fn read(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json).map_err(|e| {
            FolioError::Storage(format!("cannot write {}: {e}", self.path.display()))
        })?;
        log::debug!("Persisted {key} to {}", self.path.display());
        Ok(())
    }
}
