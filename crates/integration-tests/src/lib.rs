//! Integration tests for Karoo.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p karoo-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart persistence and recovery over shared file storage
//! - `auth_flow` - Registration, login, and session across restarts

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test tracing subscriber once per process.
///
/// Controlled via `RUST_LOG`; silent-recovery warnings from the stores
/// show up in test output when enabled.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
