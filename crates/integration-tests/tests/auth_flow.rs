//! Registration, login, and session flows across restarts.

use karoo_integration_tests::init_tracing;
use karoo_storefront::services::auth::{AuthError, AuthService, NewUser};
use karoo_storefront::storage::{FileStorage, Storage, keys};

const PASSWORD: &str = "Str0ng!pass";

fn sipho() -> NewUser<'static> {
    NewUser {
        first_name: "Sipho",
        surname: "Dlamini",
        email: "sipho@example.com",
        password: PASSWORD,
    }
}

#[test]
fn register_login_logout_across_restarts() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open storage");

    {
        let mut auth = AuthService::new(storage.clone());
        let record = auth.register(sipho()).expect("register");
        assert_eq!(record.email.as_str(), "sipho@example.com");
        assert!(auth.session().is_logged_in);
    }

    // Restart: the session survives, the directory is intact.
    {
        let mut auth = AuthService::new(storage.clone());
        assert!(auth.session().is_logged_in);
        assert_eq!(auth.session().name, "Sipho");
        auth.logout();
    }

    // Second restart: signed out, but login still works.
    let mut auth = AuthService::new(storage);
    assert!(!auth.session().is_logged_in);
    let record = auth.login("SIPHO@example.com ", PASSWORD).expect("login");
    assert_eq!(record.first_name, "Sipho");
}

#[test]
fn duplicate_registration_is_surfaced() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open storage");

    let mut auth = AuthService::new(storage.clone());
    auth.register(sipho()).expect("first registration");

    // Another service instance over the same backend sees the conflict.
    let mut second = AuthService::new(storage);
    let result = second.register(sipho());
    assert!(matches!(result, Err(AuthError::EmailAlreadyRegistered)));
}

#[test]
fn malformed_user_directory_recovers_to_empty() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open storage");
    storage.set(keys::USERS, "][").expect("seed bad data");

    let mut auth = AuthService::new(storage);
    let result = auth.login("sipho@example.com", PASSWORD);
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));

    // Registration repairs the directory.
    auth.register(sipho()).expect("register after recovery");
    auth.logout();
    assert!(auth.login("sipho@example.com", PASSWORD).is_ok());
}

#[test]
fn cart_and_directory_keys_stay_disjoint() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open storage");

    let mut auth = AuthService::new(storage.clone());
    auth.register(sipho()).expect("register");

    assert!(storage.get(keys::USERS).expect("read").is_some());
    assert!(storage.get(keys::SESSION).expect("read").is_some());
    assert!(storage.get(keys::CART).expect("read").is_none());
}
