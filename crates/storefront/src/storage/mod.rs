//! Durable key-value storage backends.
//!
//! Every store in this crate persists through the [`Storage`] trait, the
//! process-side stand-in for browser local storage: a scoped, string-keyed,
//! string-valued map. Backends use interior mutability so one instance can
//! be shared by the cart store, user directory, and session store.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Well-known storage keys.
///
/// Each component persists under its own disjoint key, so there is no
/// cross-component contention on the shared backend.
pub mod keys {
    /// Key for the serialized cart collection.
    pub const CART: &str = "cart:v1";

    /// Key for the user directory records.
    pub const USERS: &str = "store_users_v1";

    /// Key for the signed-in session state.
    pub const SESSION: &str = "store_auth_v1";
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be used by this backend.
    #[error("invalid storage key {key:?}: {reason}")]
    InvalidKey {
        /// The offending key.
        key: String,
        /// Why the backend rejected it.
        reason: &'static str,
    },

    /// The underlying I/O operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A scoped string-keyed, string-valued persistence interface.
///
/// All methods take `&self`; implementations use interior mutability
/// (e.g. a `Mutex`) so a cloned handle to the same backing map can be
/// injected into several stores.
pub trait Storage {
    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid for this backend or
    /// the read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid for this backend or
    /// the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value by key.
    ///
    /// Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid for this backend or
    /// the removal fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
