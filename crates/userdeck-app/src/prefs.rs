//! Persisted user preferences as an injected key-value store.
//!
//! The view-mode toggle survives restarts through a single key in a
//! small TOML file. The store is a trait so the state machine can be
//! exercised against an in-memory double.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use userdeck_core::prelude::*;

/// Key under which the list view mode ("table" or "card") is stored.
pub const VIEW_KEY: &str = "view";

const PREFS_FILENAME: &str = "prefs.toml";

/// Minimal key-value store for user preferences.
pub trait PrefsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────────────────

/// TOML-file-backed preferences under the platform config directory.
///
/// A missing or unparseable file degrades to an empty store; writes are
/// atomic (temp file + rename).
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePrefs {
    /// Open (or lazily create on first write) the prefs file in `dir`.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(PREFS_FILENAME);

        let values = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(values) => values,
                    Err(e) => {
                        warn!("Failed to parse {:?}: {}", path, e);
                        BTreeMap::new()
                    }
                },
                Err(e) => {
                    warn!("Failed to read {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            debug!("No prefs file at {:?}, starting empty", path);
            BTreeMap::new()
        };

        Self { path, values }
    }

    /// Default preferences directory: `<config dir>/userdeck`.
    pub fn default_dir() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("userdeck")
    }

    fn persist(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::config("prefs path has no parent directory"))?;
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create prefs dir: {e}")))?;
        }

        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| Error::config(format!("Failed to serialize prefs: {e}")))?;

        // Atomic write: write to temp, then rename
        let temp_path = dir.join(".prefs.toml.tmp");
        std::fs::write(&temp_path, &content)
            .map_err(|e| Error::config(format!("Failed to write temp prefs file: {e}")))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::config(format!("Failed to rename temp prefs file: {e}")))?;

        debug!("Saved prefs to {:?}", self.path);
        Ok(())
    }
}

impl PrefsStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store (test double)
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryPrefs {
    values: BTreeMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefsStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_prefs_round_trip() {
        let mut prefs = MemoryPrefs::new();
        assert_eq!(prefs.get(VIEW_KEY), None);
        prefs.set(VIEW_KEY, "card").unwrap();
        assert_eq!(prefs.get(VIEW_KEY), Some("card".to_string()));
    }

    #[test]
    fn test_file_prefs_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let mut prefs = FilePrefs::open(dir.path());
        prefs.set(VIEW_KEY, "card").unwrap();

        // A fresh instance pointed at the same directory sees the value.
        let reopened = FilePrefs::open(dir.path());
        assert_eq!(reopened.get(VIEW_KEY), Some("card".to_string()));
    }

    #[test]
    fn test_file_prefs_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePrefs::open(dir.path());
        assert_eq!(prefs.get(VIEW_KEY), None);
    }

    #[test]
    fn test_file_prefs_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFS_FILENAME), "not = [valid").unwrap();

        let prefs = FilePrefs::open(dir.path());
        assert_eq!(prefs.get(VIEW_KEY), None);
    }

    #[test]
    fn test_file_prefs_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = FilePrefs::open(dir.path());
        prefs.set(VIEW_KEY, "card").unwrap();
        prefs.set(VIEW_KEY, "table").unwrap();

        let reopened = FilePrefs::open(dir.path());
        assert_eq!(reopened.get(VIEW_KEY), Some("table".to_string()));
    }
}
