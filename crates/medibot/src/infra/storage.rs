//! Durable key-value slots for persisted store state.
//!
//! A slot holds one opaque string. The store owns the encoding; adapters
//! only move bytes.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;

/// Key-value slot storage used for best-effort persistence.
#[cfg_attr(test, mockall::automock)]
pub trait StateStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the slot is empty.
    ///
    /// # Errors
    /// Returns an error if the slot exists but cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Empties the slot. Removing a missing slot succeeds.
    ///
    /// # Errors
    /// Returns an error if an existing slot cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Stores each slot as `<dir>/<key>.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn io_error(path: &Path, source: io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl StateStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(io_error(&path, error)),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|error| io_error(&self.dir, error))?;

        let path = self.slot_path(key);
        let staging_path = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&staging_path, value).map_err(|error| io_error(&staging_path, error))?;
        // Rename so readers never observe a half-written slot.
        fs::rename(&staging_path, &path).map_err(|error| io_error(&path, error))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(io_error(&path, error)),
        }
    }
}

/// Process-local storage, used by tests and headless runs.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_slots<T>(
        &self,
        action: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))?;

        Ok(action(&mut slots))
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_slots(|slots| slots.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_slots(|slots| {
            slots.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_slots(|slots| {
            slots.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_storage_load_returns_none_for_missing_slot() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let storage = FileStorage::new(dir.path());

        // Act
        let value = storage.load("medibot-storage");

        // Assert
        assert!(matches!(value, Ok(None)));
    }

    #[test]
    fn test_file_storage_save_then_load_returns_value() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let storage = FileStorage::new(dir.path().join("nested"));

        // Act
        storage
            .save("medibot-storage", "{\"version\":0}")
            .expect("save should succeed");
        let value = storage.load("medibot-storage").expect("load should succeed");

        // Assert
        assert_eq!(value.as_deref(), Some("{\"version\":0}"));
        assert!(storage.slot_path("medibot-storage").exists());
        assert!(!dir.path().join("nested/medibot-storage.json.tmp").exists());
    }

    #[test]
    fn test_file_storage_remove_is_idempotent() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let storage = FileStorage::new(dir.path());
        storage.save("slot", "value").expect("save should succeed");

        // Act
        let first = storage.remove("slot");
        let second = storage.remove("slot");

        // Assert
        assert!(first.is_ok());
        assert!(second.is_ok());
        assert!(matches!(storage.load("slot"), Ok(None)));
    }

    #[test]
    fn test_file_storage_load_reports_unreadable_slot() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let storage = FileStorage::new(dir.path());
        fs::create_dir_all(storage.slot_path("slot")).expect("failed to create directory slot");

        // Act
        let result = storage.load("slot");

        // Assert
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_memory_storage_overwrites_and_removes() {
        // Arrange
        let storage = MemoryStorage::new();

        // Act
        storage.save("slot", "first").expect("save should succeed");
        storage.save("slot", "second").expect("save should succeed");
        let loaded = storage.load("slot").expect("load should succeed");
        storage.remove("slot").expect("remove should succeed");

        // Assert
        assert_eq!(loaded.as_deref(), Some("second"));
        assert!(matches!(storage.load("slot"), Ok(None)));
    }
}
