//! Durable snapshot of the persisted state slice.
//!
//! Only cart, theme and user survive a restart; search, filters, orders
//! and offers are session-local. The snapshot is a single JSON document
//! stored under a fixed key in a flat key-value file. There is no schema
//! versioning; an unreadable snapshot is treated as absent.

use crate::state::{StoreState, Theme};
use savora_commerce::account::User;
use savora_commerce::cart::Cart;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key the snapshot lives under.
pub const STORAGE_KEY: &str = "savora-store";

/// Errors from snapshot storage.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write snapshot file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The persisted slice of [`StoreState`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub cart: Cart,
    pub theme: Theme,
    pub user: Option<User>,
}

impl Snapshot {
    /// Capture the persisted slice of the given state.
    pub fn capture(state: &StoreState) -> Self {
        Self {
            cart: state.cart.clone(),
            theme: state.theme,
            user: state.user.clone(),
        }
    }

    /// Apply the snapshot onto a state object, leaving session-local
    /// slices untouched.
    pub fn restore_into(self, state: &mut StoreState) {
        state.cart = self.cart;
        state.theme = self.theme;
        state.user = self.user;
    }
}

/// A flat key-value store backed by a single JSON file.
///
/// Values are JSON documents keyed by string. Writes rewrite the whole
/// file; there is a single writer, so no locking is needed.
#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    entries: BTreeMap<String, serde_json::Value>,
}

impl KvStore {
    /// Open the store file, creating parent directories as needed. A
    /// missing file yields an empty store; a corrupt one is discarded
    /// with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "discarding unreadable storage file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(SnapshotError::Read { path, source }),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode a value. Returns `None` when the key is absent or
    /// the stored value no longer decodes.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(key, error = %e, "stored value no longer decodes");
                None
            }
        }
    }

    /// Encode and write a value, flushing the whole file to disk.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SnapshotError> {
        let encoded = serde_json::to_value(value).map_err(SnapshotError::Encode)?;
        self.entries.insert(key.to_string(), encoded);
        self.flush()
    }

    /// Remove a key, flushing the whole file to disk.
    pub fn remove(&mut self, key: &str) -> Result<(), SnapshotError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SnapshotError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let raw = serde_json::to_string_pretty(&self.entries).map_err(SnapshotError::Encode)?;
        fs::write(&self.path, raw).map_err(|source| SnapshotError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "flushed storage file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path().join("storage.json")).unwrap();
        assert!(store.get::<Snapshot>(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_set_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = KvStore::open(&path).unwrap();
        let mut snapshot = Snapshot::default();
        snapshot.theme = Theme::Dark;
        store.set(STORAGE_KEY, &snapshot).unwrap();

        let reopened = KvStore::open(&path).unwrap();
        let restored: Snapshot = reopened.get(STORAGE_KEY).unwrap();
        assert_eq!(restored.theme, Theme::Dark);
    }

    #[test]
    fn test_corrupt_file_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let store = KvStore::open(&path).unwrap();
        assert!(store.get::<Snapshot>(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = KvStore::open(&path).unwrap();
        store.set(STORAGE_KEY, &Snapshot::default()).unwrap();
        store.remove(STORAGE_KEY).unwrap();
        assert!(store.get::<Snapshot>(STORAGE_KEY).is_none());
    }
}
