//! The cart store.
//!
//! [`CartStore`] owns the ordered line-item collection, enforces its
//! invariants (one row per identity key, quantities at least 1, insertion
//! order stable), and mirrors every mutation to durable storage
//! synchronously. UI collaborators call the operations here and re-render
//! from [`CartStore::snapshot`]; they never mutate rows in place.
//!
//! Storage is a best-effort mirror: failures on the write path are logged
//! and swallowed, and malformed persisted data hydrates as an empty cart.

mod line_item;

pub use line_item::{IdentityKey, LineItem};

use rust_decimal::Decimal;

use karoo_core::ProductId;

use crate::catalog::Product;
use crate::storage::{Storage, keys};

/// The cart state container.
///
/// Single-writer by design: every operation runs synchronously to
/// completion, including persistence, before the next begins.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    storage: S,
    storage_key: String,
    items: Vec<LineItem>,
}

impl<S: Storage> CartStore<S> {
    /// Hydrate a cart from storage under the default cart key.
    ///
    /// Absent, unparseable, or non-array data yields an empty cart; this
    /// is a recoverable condition, never an error.
    #[must_use]
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, keys::CART)
    }

    /// Hydrate a cart persisted under a non-default key.
    #[must_use]
    pub fn load_with_key(storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let items = hydrate(&storage, &storage_key);
        Self {
            storage,
            storage_key,
            items,
        }
    }

    /// Add one unit of `product` in the given variant.
    ///
    /// If a row with the same identity key exists, its quantity is
    /// incremented in place and the stored snapshot wins over the incoming
    /// product data; the row keeps its position. Otherwise a new
    /// quantity-1 row is appended.
    ///
    /// Returns the identity key of the affected row.
    pub fn add(&mut self, product: &Product, variant: Option<&str>) -> IdentityKey {
        let key = IdentityKey::derive(product.id, variant);
        if let Some(item) = self.items.iter_mut().find(|it| it.key == key) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::from_product(product, variant));
        }
        tracing::debug!(key = %key, "cart add");
        self.persist();
        key
    }

    /// Delete the row with `key`, if present. Absent keys are a no-op.
    pub fn remove(&mut self, key: &IdentityKey) {
        self.items.retain(|it| &it.key != key);
        self.persist();
    }

    /// Set the quantity of the row with `key` to exactly `quantity`.
    ///
    /// A quantity of zero or below removes the row. Unknown keys are a
    /// no-op.
    pub fn set_quantity(&mut self, key: &IdentityKey, quantity: i64) {
        match u32::try_from(quantity) {
            Ok(qty) if qty > 0 => {
                if let Some(item) = self.items.iter_mut().find(|it| &it.key == key) {
                    item.quantity = qty;
                }
                self.persist();
            }
            // Zero, negative, or out of range: treat as removal.
            _ => self.remove(key),
        }
    }

    /// Remove one unit of `product_id`, ignoring variants.
    ///
    /// The first row (in insertion order) matching the product is
    /// decremented, and removed when its quantity reaches zero. This is
    /// the variant-naive vocabulary used by catalog views that do not
    /// distinguish colours; it is an adapter over the identity-keyed
    /// collection, not a second cart.
    pub fn remove_one_unit(&mut self, product_id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|it| it.product_id == product_id) {
            if item.quantity > 1 {
                item.quantity -= 1;
            } else {
                let key = item.key.clone();
                self.items.retain(|it| it.key != key);
            }
            self.persist();
        }
    }

    /// Remove every row of `product_id`, across all variants.
    pub fn remove_all_units(&mut self, product_id: ProductId) {
        self.items.retain(|it| it.product_id != product_id);
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// The current ordered line-item sequence.
    #[must_use]
    pub fn snapshot(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all quantities. Zero for an empty cart.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|it| u64::from(it.quantity)).sum()
    }

    /// Sum of unit price times quantity across all rows. Zero for an
    /// empty cart.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Mirror the in-memory collection to storage.
    ///
    /// Write failures are logged and swallowed, never surfaced.
    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.items) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(key = %self.storage_key, "failed to encode cart: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.storage_key, &encoded) {
            tracing::warn!(key = %self.storage_key, "failed to persist cart: {e}");
        }
    }
}

/// Load and sanitize the persisted collection.
///
/// Invariants are re-established against externally tampered data: rows
/// with zero quantity are dropped, and later rows duplicating an identity
/// key are discarded in favour of the first.
fn hydrate<S: Storage>(storage: &S, storage_key: &str) -> Vec<LineItem> {
    let raw = match storage.get(storage_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key = %storage_key, "failed to read cart, starting empty: {e}");
            return Vec::new();
        }
    };

    let parsed: Vec<LineItem> = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(key = %storage_key, "malformed cart data, starting empty: {e}");
            return Vec::new();
        }
    };

    let mut items: Vec<LineItem> = Vec::with_capacity(parsed.len());
    for item in parsed {
        if item.quantity == 0 {
            tracing::warn!(key = %item.key, "dropping persisted row with zero quantity");
            continue;
        }
        if items.iter().any(|it| it.key == item.key) {
            tracing::warn!(key = %item.key, "dropping persisted row with duplicate key");
            continue;
        }
        items.push(item);
    }
    items
}
