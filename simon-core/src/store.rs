//! Key-value persistence port for high scores.
//!
//! The game persists exactly one entry: key [`HIGH_SCORES_KEY`], value a JSON
//! blob of per-difficulty best scores. [`ScoreStore`] abstracts where that
//! entry lives — in-memory for tests, a file on disk for the terminal
//! harness, browser local storage in the original.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, SimonError};

/// Storage key for the high-score table.
pub const HIGH_SCORES_KEY: &str = "simonHighScores";

/// Minimal string key-value store.
pub trait ScoreStore {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    /// Returns [`SimonError::Storage`] if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`SimonError::Storage`] if the backing store cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed an entry, e.g. a prior high-score blob.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Inspect the current value under `key` without going through the port.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key under a directory.
///
/// The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ScoreStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SimonError::Storage(format!(
                "reading {}: {e}",
                self.entry_path(key).display()
            ))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| SimonError::Storage(format!("creating {}: {e}", self.dir.display())))?;
        std::fs::write(self.entry_path(key), value).map_err(|e| {
            SimonError::Storage(format!("writing {}: {e}", self.entry_path(key).display()))
        })
    }
}
