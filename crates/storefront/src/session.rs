//! Signed-in session state.
//!
//! The session is a single JSON object under its own storage key,
//! hydrated at construction so a sign-in survives a restart the way it
//! survives a page reload.

use serde::{Deserialize, Serialize};

use crate::storage::{Storage, keys};

/// The persisted session shape: `{"isLoggedIn": ..., "name": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    /// Whether a user is signed in.
    pub is_logged_in: bool,
    /// Display name of the signed-in user; empty when signed out.
    pub name: String,
}

impl SessionState {
    /// A session for the named signed-in user.
    #[must_use]
    pub fn signed_in(name: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            name: name.into(),
        }
    }
}

/// Store for the session object.
#[derive(Debug)]
pub struct SessionStore<S: Storage> {
    storage: S,
    storage_key: String,
    state: SessionState,
}

impl<S: Storage> SessionStore<S> {
    /// Hydrate the session from storage under the default session key.
    ///
    /// Absent or malformed data yields the signed-out default.
    #[must_use]
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, keys::SESSION)
    }

    /// Hydrate the session persisted under a non-default key.
    #[must_use]
    pub fn load_with_key(storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let state = match storage.get(&storage_key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = %storage_key, "malformed session, signing out: {e}");
                SessionState::default()
            }),
            Ok(None) => SessionState::default(),
            Err(e) => {
                tracing::warn!(key = %storage_key, "failed to read session: {e}");
                SessionState::default()
            }
        };
        Self {
            storage,
            storage_key,
            state,
        }
    }

    /// The current session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the session state and mirror it to storage.
    ///
    /// Write failures are logged and swallowed, matching the cart's
    /// storage policy.
    pub fn set(&mut self, state: SessionState) {
        self.state = state;
        let encoded = match serde_json::to_string(&self.state) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(key = %self.storage_key, "failed to encode session: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.storage_key, &encoded) {
            tracing::warn!(key = %self.storage_key, "failed to persist session: {e}");
        }
    }

    /// Reset to the signed-out default.
    pub fn clear(&mut self) {
        self.set(SessionState::default());
    }
}
