//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{Storage, StorageError};

/// An in-memory [`Storage`] backend.
///
/// Cloning yields another handle to the same backing map, so a cart store
/// and a user directory constructed from clones of one `MemoryStorage`
/// share state the way two components share one local storage area.
///
/// State is lost when the last handle is dropped; use
/// [`FileStorage`](super::FileStorage) where persistence across restarts
/// is needed.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock means a panic mid-insert on a plain HashMap;
        // the map itself is still consistent, so keep going.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}
