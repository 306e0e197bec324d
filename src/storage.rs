//! Storage Boundary
//!
//! Defines the abstract interface to the browser's key-value storage.
//! Implementations can use localStorage, in-memory, etc.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The single key the saved-list blob lives under.
pub const SAVED_LISTS_KEY: &str = "savedLists";

/// Errors surfaced by a storage write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// localStorage is missing (no window, or access denied)
    Unavailable,
    /// The backend refused the write (quota exceeded, privacy mode)
    Rejected,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Rejected => write!(f, "storage rejected the write"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Synchronous key-value storage. localStorage has no async surface, so
/// neither does this trait.
pub trait StorageBackend {
    /// Read the value under `key`, `None` when absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Backend over `window.localStorage`. A missing window or storage object
/// degrades to absent reads and failed writes rather than panicking.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected)
    }
}

/// In-memory backend for tests. Entries sit behind a shared handle so a
/// test can keep a clone and inspect what the repository wrote.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value under `key`, as a test would read it back.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut backend = MemoryStorage::new();
        assert_eq!(backend.read("k"), None);
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k"), Some("v".to_string()));

        // the shared handle sees the same entries
        let handle = backend.clone();
        backend.write("k", "v2").unwrap();
        assert_eq!(handle.snapshot("k"), Some("v2".to_string()));
    }
}
