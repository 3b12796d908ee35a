//! Key-value storage backends
//!
//! The ledger persists a single string blob under a fixed key. Backends only
//! need whole-value get and set.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::LedgerError;

use super::file_io::{read_optional, write_atomic};

/// Persistent string storage addressed by key
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        read_optional(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        write_atomic(self.path_for(key), value)
    }
}

/// Volatile storage, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, e.g. to simulate data written by a previous session
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that reads normally but rejects every write
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ReadOnlyStorage {
    inner: MemoryStorage,
}

#[cfg(test)]
impl ReadOnlyStorage {
    pub(crate) fn new(inner: MemoryStorage) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
impl KeyValueStorage for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), LedgerError> {
        Err(LedgerError::Storage(format!("Cannot write '{}': read-only", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());

        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn test_file_storage_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().join("data"));

        storage.set("ledger", "[]").unwrap();
        assert_eq!(storage.get("ledger").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("data").join("ledger.json").exists());
    }

    #[test]
    fn test_read_only_storage_rejects_writes() {
        let mut storage = ReadOnlyStorage::new(MemoryStorage::new().with_entry("a", "1"));
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert!(matches!(storage.set("a", "2"), Err(LedgerError::Storage(_))));
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new().with_entry("a", "1");
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));

        storage.set("a", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.get("b").unwrap(), None);
    }
}
