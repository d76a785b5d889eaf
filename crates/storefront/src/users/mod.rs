//! The mock user directory.
//!
//! Credential records live under their own storage key, disjoint from the
//! cart, as a JSON array with camelCase field names. The directory is a
//! repository over [`Storage`]; policy (password rules, hashing, session
//! handling) belongs to [`crate::services::auth`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use karoo_core::Email;

use crate::storage::{Storage, StorageError, keys};

/// Errors that can occur during directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A record with the same email already exists.
    #[error("email already registered")]
    Conflict,

    /// The underlying storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The directory could not be re-encoded for persistence.
    #[error("failed to encode user directory: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A stored credential record.
///
/// The email is always in its normalized (trimmed, lowercased) form; the
/// password is stored only as an argon2id hash string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique user ID.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub surname: String,
    /// Normalized email address; unique across the directory.
    pub email: Email,
    /// PHC-format argon2id password hash.
    pub password_hash: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Repository for user records over durable storage.
#[derive(Debug)]
pub struct UserDirectory<S: Storage> {
    storage: S,
    storage_key: String,
}

impl<S: Storage> UserDirectory<S> {
    /// Open the directory under the default users key.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, keys::USERS)
    }

    /// Open the directory under a non-default key.
    #[must_use]
    pub fn with_key(storage: S, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
        }
    }

    /// All stored records, in registration order.
    ///
    /// Absent or malformed persisted data yields an empty directory; this
    /// is a recoverable condition, never an error.
    #[must_use]
    pub fn all(&self) -> Vec<UserRecord> {
        let raw = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.storage_key, "failed to read user directory: {e}");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key = %self.storage_key, "malformed user directory, starting empty: {e}");
            Vec::new()
        })
    }

    /// Find a record by normalized email.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<UserRecord> {
        self.all().into_iter().find(|u| &u.email == email)
    }

    /// Append a new record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Conflict`] if a record with the same
    /// email exists, and [`DirectoryError::Storage`] if the write fails.
    pub fn create(&self, record: UserRecord) -> Result<UserRecord, DirectoryError> {
        let mut records = self.all();
        if records.iter().any(|u| u.email == record.email) {
            return Err(DirectoryError::Conflict);
        }
        records.push(record.clone());

        let encoded = serde_json::to_string(&records)?;
        self.storage.set(&self.storage_key, &encoded)?;
        Ok(record)
    }
}
