//! Durable key/value storage
//!
//! Holds the three values the session client keeps across restarts:
//! the user record, the auth token and the cached image details.
//! Values are plain strings; structured records are JSON-encoded by the caller.
//!
//! `FileStorage` keeps all entries in a single JSON object file that is
//! rewritten on every change. `MemoryStorage` keeps them in-process.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The fixed set of storage keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Serialized user record
    User,
    /// Raw bearer token
    Token,
    /// Serialized `{data, dateAdded}` image record
    ImageDetails,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [Self::User, Self::Token, Self::ImageDetails];

    /// The key name as written to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Token => "token",
            Self::ImageDetails => "imageDetails",
        }
    }
}

/// Key/value storage backend
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// between the store middleware and startup seeding.
pub trait Storage: Send + Sync {
    /// Read a value, None if absent
    fn get(&self, key: StorageKey) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: StorageKey, value: &str) -> Result<()>;

    /// Remove a value. Removing an absent key is not an error.
    fn remove(&self, key: StorageKey) -> Result<()>;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process storage, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: StorageKey) -> Option<String> {
        lock(&self.entries).get(key.as_str()).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        lock(&self.entries).insert(key.as_str().to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        lock(&self.entries).remove(key.as_str());
        Ok(())
    }
}

/// Storage backed by a JSON object file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`
    ///
    /// A missing file starts empty. An unreadable or malformed file is logged
    /// and also starts empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Ignoring unreadable local storage {:?}: {:#}", path, e);
                BTreeMap::new()
            }
        };
        log::debug!("Opened local storage {:?} ({} entries)", path, entries.len());

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read local storage file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse local storage file: {:?}", path))
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize local storage")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write local storage file: {:?}", self.path))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: StorageKey) -> Option<String> {
        lock(&self.entries).get(key.as_str()).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        let mut entries = lock(&self.entries);
        let mut updated = entries.clone();
        updated.insert(key.as_str().to_string(), value.to_string());
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        let mut entries = lock(&self.entries);
        if !entries.contains_key(key.as_str()) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key.as_str());
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }
}
