//! Authentication service.
//!
//! Mock registration and login over the user directory. "Mock" covers the
//! scope (no real identity provider), not the credential handling:
//! passwords are salted and hashed with argon2id, and a failure of the
//! hashing primitive is a hard error rather than a downgrade to a
//! recoverable form.
//!
//! The service owns the session: registration and login sign the user in,
//! logout resets to the signed-out default, exactly the flow of the UI it
//! backs.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use uuid::Uuid;

use karoo_core::Email;

use crate::session::{SessionState, SessionStore};
use crate::storage::Storage;
use crate::users::{DirectoryError, UserDirectory, UserRecord};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum first-name length.
const MAX_FIRST_NAME_LENGTH: usize = 15;

/// Maximum surname length.
const MAX_SURNAME_LENGTH: usize = 20;

/// Registration input.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    /// Given name (1-15 characters).
    pub first_name: &'a str,
    /// Family name (1-20 characters).
    pub surname: &'a str,
    /// Email address; normalized before storage.
    pub email: &'a str,
    /// Plaintext password; hashed before storage, never persisted.
    pub password: &'a str,
}

/// Authentication service.
///
/// Handles user registration, login, and the signed-in session.
#[derive(Debug)]
pub struct AuthService<S: Storage> {
    users: UserDirectory<S>,
    session: SessionStore<S>,
}

impl<S: Storage + Clone> AuthService<S> {
    /// Create an authentication service over a shared storage backend.
    ///
    /// The directory and session persist under their own disjoint keys of
    /// the same backend.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            users: UserDirectory::new(storage.clone()),
            session: SessionStore::load(storage),
        }
    }
}

impl<S: Storage> AuthService<S> {
    /// Register a new user and sign them in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::InvalidName` if a name field is empty or too long.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::EmailAlreadyRegistered` if the email is taken.
    /// Returns `AuthError::PasswordHash` if the hashing primitive fails.
    pub fn register(&mut self, new_user: NewUser<'_>) -> Result<UserRecord, AuthError> {
        let email = Email::parse(new_user.email)?;

        let first_name = validate_name(new_user.first_name, "first name", MAX_FIRST_NAME_LENGTH)?;
        let surname = validate_name(new_user.surname, "surname", MAX_SURNAME_LENGTH)?;
        validate_password(new_user.password)?;

        let password_hash = hash_password(new_user.password)?;

        let record = self
            .users
            .create(UserRecord {
                id: Uuid::new_v4(),
                first_name: first_name.to_owned(),
                surname: surname.to_owned(),
                email,
                password_hash,
                created_at: Utc::now(),
            })
            .map_err(|e| match e {
                DirectoryError::Conflict => AuthError::EmailAlreadyRegistered,
                other => AuthError::Directory(other),
            })?;

        self.session
            .set(SessionState::signed_in(&record.first_name));
        tracing::debug!(user = %record.id, "registered");
        Ok(record)
    }

    /// Login with email and password, signing the user in on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// the password is wrong; the two cases are indistinguishable to the
    /// caller.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let email = Email::parse(email)?;

        let record = self
            .users
            .find_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &record.password_hash)?;

        self.session
            .set(SessionState::signed_in(&record.first_name));
        tracing::debug!(user = %record.id, "logged in");
        Ok(record)
    }

    /// Sign out, resetting the session to the signed-out default.
    pub fn logout(&mut self) {
        self.session.clear();
    }

    /// The current session state.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        self.session.state()
    }
}

/// Validate a name field: non-empty after trimming, within `max` characters.
fn validate_name<'a>(
    name: &'a str,
    field: &'static str,
    max: usize,
) -> Result<&'a str, AuthError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AuthError::InvalidName {
            field,
            reason: "cannot be empty".to_owned(),
        });
    }
    if trimmed.chars().count() > max {
        return Err(AuthError::InvalidName {
            field,
            reason: format!("must be at most {max} characters"),
        });
    }
    Ok(trimmed)
}

/// Validate password meets requirements: at least 8 characters with an
/// uppercase letter, a lowercase letter, a digit, and a symbol.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());

    if !(has_lower && has_upper && has_digit && has_symbol) {
        return Err(AuthError::WeakPassword(
            "password needs upper, lower, number, and special characters".to_owned(),
        ));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const GOOD_PASSWORD: &str = "Str0ng!pass";

    fn thandi() -> NewUser<'static> {
        NewUser {
            first_name: "Thandi",
            surname: "Nkosi",
            email: "thandi@example.com",
            password: GOOD_PASSWORD,
        }
    }

    #[test]
    fn test_register_signs_in() {
        let mut auth = AuthService::new(MemoryStorage::new());
        let record = auth.register(thandi()).unwrap();

        assert_eq!(record.email.as_str(), "thandi@example.com");
        assert!(auth.session().is_logged_in);
        assert_eq!(auth.session().name, "Thandi");
    }

    #[test]
    fn test_register_normalizes_email() {
        let mut auth = AuthService::new(MemoryStorage::new());
        let record = auth
            .register(NewUser {
                email: "  Thandi@Example.COM ",
                ..thandi()
            })
            .unwrap();
        assert_eq!(record.email.as_str(), "thandi@example.com");
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut auth = AuthService::new(MemoryStorage::new());
        auth.register(thandi()).unwrap();

        // Same address in another spelling still conflicts.
        let result = auth.register(NewUser {
            email: "THANDI@example.com",
            ..thandi()
        });
        assert!(matches!(result, Err(AuthError::EmailAlreadyRegistered)));
    }

    #[test]
    fn test_register_rejects_weak_passwords() {
        for password in ["short1!", "alllowercase1!", "NOUPPER..no", "NoDigits!!"] {
            let mut auth = AuthService::new(MemoryStorage::new());
            let result = auth.register(NewUser {
                password,
                ..thandi()
            });
            assert!(
                matches!(result, Err(AuthError::WeakPassword(_))),
                "{password} should be rejected"
            );
        }
    }

    #[test]
    fn test_register_rejects_bad_names() {
        let mut auth = AuthService::new(MemoryStorage::new());
        let result = auth.register(NewUser {
            first_name: "   ",
            ..thandi()
        });
        assert!(matches!(
            result,
            Err(AuthError::InvalidName {
                field: "first name",
                ..
            })
        ));

        let result = auth.register(NewUser {
            surname: "x".repeat(21).as_str(),
            ..thandi()
        });
        assert!(matches!(
            result,
            Err(AuthError::InvalidName { field: "surname", .. })
        ));
    }

    #[test]
    fn test_password_is_stored_hashed() {
        let mut auth = AuthService::new(MemoryStorage::new());
        let record = auth.register(thandi()).unwrap();

        assert!(record.password_hash.starts_with("$argon2"));
        assert!(!record.password_hash.contains(GOOD_PASSWORD));
    }

    #[test]
    fn test_login_with_correct_password() {
        let storage = MemoryStorage::new();
        {
            let mut auth = AuthService::new(storage.clone());
            auth.register(thandi()).unwrap();
            auth.logout();
        }

        // Fresh service over the same backend, as after a restart.
        let mut auth = AuthService::new(storage);
        assert!(!auth.session().is_logged_in);

        let record = auth.login("thandi@example.com", GOOD_PASSWORD).unwrap();
        assert_eq!(record.first_name, "Thandi");
        assert!(auth.session().is_logged_in);
    }

    #[test]
    fn test_login_wrong_password() {
        let mut auth = AuthService::new(MemoryStorage::new());
        auth.register(thandi()).unwrap();
        auth.logout();

        let result = auth.login("thandi@example.com", "Wrong1!pass");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!auth.session().is_logged_in);
    }

    #[test]
    fn test_login_unknown_email() {
        let mut auth = AuthService::new(MemoryStorage::new());
        let result = auth.login("nobody@example.com", GOOD_PASSWORD);
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_logout_clears_session() {
        let storage = MemoryStorage::new();
        let mut auth = AuthService::new(storage.clone());
        auth.register(thandi()).unwrap();
        auth.logout();

        assert!(!auth.session().is_logged_in);
        let reloaded = AuthService::new(storage);
        assert!(!reloaded.session().is_logged_in);
    }

    #[test]
    fn test_validate_password_accepts_strong() {
        assert!(validate_password("Str0ng!pass").is_ok());
        assert!(validate_password("Underscore_1A").is_ok());
    }
}
