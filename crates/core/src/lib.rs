//! Karoo Core - Shared types library.
//!
//! This crate provides common types used across all Karoo components:
//! - `storefront` - The storefront state layer (cart, users, session)
//! - `integration-tests` - Cross-component tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
