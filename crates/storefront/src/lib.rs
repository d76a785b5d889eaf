//! Karoo Storefront - the storefront state layer.
//!
//! This crate owns every piece of client-side state the storefront UI
//! renders from: the shopping cart, the mock user directory, and the
//! signed-in session. UI collaborators never mutate state directly; they
//! call the public operations here and re-render from the returned
//! snapshots.
//!
//! All state is mirrored to an injected [`storage::Storage`] backend on
//! every mutation, so it survives process restarts the way browser local
//! storage survives page reloads. Malformed persisted data is never fatal:
//! each store falls back to its empty/default state and logs a warning.
//!
//! # Modules
//!
//! - [`cart`] - The cart store: line items, merge semantics, aggregates
//! - [`catalog`] - Product snapshots consumed by the cart
//! - [`storage`] - Durable key-value storage backends
//! - [`users`] - The mock user directory
//! - [`services`] - Authentication over the user directory
//! - [`session`] - Signed-in session state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod services;
pub mod session;
pub mod storage;
pub mod users;
