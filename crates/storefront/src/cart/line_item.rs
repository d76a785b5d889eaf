//! Cart line item types.

use core::fmt;

use serde::{Deserialize, Serialize};

use karoo_core::{Price, ProductId};

use crate::catalog::Product;

/// The variant discriminator used when a product is added without one.
const DEFAULT_VARIANT: &str = "default";

/// Composite key distinguishing cart rows by product and variant.
///
/// Two additions with the same key collapse into one [`LineItem`]; the
/// same product in two colours yields two rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Derive the key for a product plus optional variant.
    ///
    /// A missing variant maps to a fixed `default` discriminator, so
    /// variant-less additions of the same product still merge.
    #[must_use]
    pub fn derive(product_id: ProductId, variant: Option<&str>) -> Self {
        Self(format!(
            "{product_id}:{}",
            variant.unwrap_or(DEFAULT_VARIANT)
        ))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cart row: a product+variant pair and its quantity.
///
/// Descriptive and pricing fields are the snapshot captured at add-time;
/// they are never refreshed from the catalog. Serialized field names match
/// the persisted cart layout (`id`/`key`/`title`/`price`/`img`/`colour`/
/// `qty`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog product this row was created from.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Identity key for merging and removal.
    pub key: IdentityKey,
    /// Title snapshot.
    pub title: String,
    /// Unit price snapshot.
    #[serde(rename = "price")]
    pub unit_price: Price,
    /// Image reference snapshot.
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Variant discriminator (colour), if one was chosen.
    #[serde(rename = "colour", default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Number of units; always at least 1 while the row exists.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl LineItem {
    /// Create a quantity-1 row from a product snapshot.
    #[must_use]
    pub fn from_product(product: &Product, variant: Option<&str>) -> Self {
        Self {
            product_id: product.id,
            key: IdentityKey::derive(product.id, variant),
            title: product.title.clone(),
            unit_price: product.unit_price,
            image: product.image.clone(),
            variant: variant.map(str::to_owned),
            quantity: 1,
        }
    }

    /// The total for this row: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> rust_decimal::Decimal {
        self.unit_price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i32, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Price::new(Decimal::new(cents, 2)).unwrap(),
        )
    }

    #[test]
    fn test_derive_uses_default_variant() {
        let key = IdentityKey::derive(ProductId::new(1), None);
        assert_eq!(key.as_str(), "1:default");
    }

    #[test]
    fn test_derive_distinguishes_variants() {
        let black = IdentityKey::derive(ProductId::new(1), Some("Black"));
        let white = IdentityKey::derive(ProductId::new(1), Some("White"));
        assert_ne!(black, white);
    }

    #[test]
    fn test_from_product_starts_at_one() {
        let item = LineItem::from_product(&product(4, 10_000), Some("Ocean"));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.key.as_str(), "4:Ocean");
        assert_eq!(item.variant.as_deref(), Some("Ocean"));
    }

    #[test]
    fn test_line_total() {
        let mut item = LineItem::from_product(&product(2, 25_000), None);
        item.quantity = 3;
        assert_eq!(item.line_total(), Decimal::new(75_000, 2));
    }

    #[test]
    fn test_persisted_field_names() {
        let item = LineItem::from_product(&product(1, 99_900), Some("Black"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["key"], "1:Black");
        assert_eq!(json["colour"], "Black");
        assert_eq!(json["qty"], 1);
        assert_eq!(json["price"], "999.00");
    }
}
