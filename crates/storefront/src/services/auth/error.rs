//! Authentication error types.

use thiserror::Error;

use crate::users::DirectoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] karoo_core::EmailError),

    /// Invalid name field.
    #[error("invalid {field}: {reason}")]
    InvalidName {
        /// Which name field failed validation.
        field: &'static str,
        /// Why it failed.
        reason: String,
    },

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email already registered.
    #[error("email already registered")]
    EmailAlreadyRegistered,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// User directory error.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Password hashing error. The hashing primitive failing is a hard
    /// error; credentials are never stored in a recoverable form.
    #[error("password hashing error")]
    PasswordHash,
}
