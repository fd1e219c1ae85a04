//! Local key-value store persisted as TOML (`<data_dir>/storage.toml`)
//!
//! Values are plain strings. The only key the app writes today is
//! [`DARK_MODE_KEY`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use agrihub_core::prelude::*;

pub const STORAGE_FILENAME: &str = "storage.toml";
pub const DARK_MODE_KEY: &str = "darkMode";

/// String key-value store backed by a single TOML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Storage file inside a data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORAGE_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a single value. Missing or unreadable files read as empty.
    pub fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    /// Write a single value, keeping every other key
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }

    /// `true` only when the stored value is exactly `"true"`
    pub fn dark_mode(&self) -> bool {
        self.get(DARK_MODE_KEY).as_deref() == Some("true")
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }

    fn load(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read {:?}: {}", self.path, e);
                return BTreeMap::new();
            }
        };

        match toml::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unparsable storage file {:?}: {}", self.path, e);
                BTreeMap::new()
            }
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::storage(&self.path, "storage path has no parent directory"))?;

        std::fs::create_dir_all(dir).map_err(|e| Error::storage(&self.path, e.to_string()))?;

        let content = toml::to_string(entries)
            .map_err(|e| Error::storage(&self.path, format!("serialize failed: {}", e)))?;

        let temp_path = dir.join(".storage.toml.tmp");
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::storage(&self.path, format!("write failed: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::storage(&self.path, format!("rename failed: {}", e)))?;

        debug!("Wrote {} key(s) to {:?}", entries.len(), self.path);
        Ok(())
    }
}
