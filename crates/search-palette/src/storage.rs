//! Persistence backend for the recent-selection history
//!
//! The engine never touches a global store directly; the host injects a
//! [`KeyValueStore`]. [`MemoryStore`] is the in-process implementation used
//! by tests and as a fallback when no durable store is available.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Errors raised by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Scoped key/value store holding string payloads
pub trait KeyValueStore {
    /// Read the payload stored under `key`, `None` when nothing is stored
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the payload stored under `key`
    fn store(&mut self, key: &str, payload: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn store(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        (**self).store(key, payload)
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}

/// In-memory store.
///
/// Clones share the same entries, so a test can keep a handle and inspect
/// what the palette persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single payload
    pub fn with_entry(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), payload.into());
        store
    }

    /// Raw payload under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn store(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
