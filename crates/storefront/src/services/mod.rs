//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Mock registration and login over the user directory

pub mod auth;
