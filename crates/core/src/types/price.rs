//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative unit price in the store's display currency.
///
/// The invariant is enforced at construction and at deserialization, so a
/// `Price` read back from storage is always valid. No currency conversion,
/// tax, or discount logic lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The total for `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let amount = Decimal::new(-100, 2);
        assert!(matches!(Price::new(amount), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::new(99900, 2)).is_ok());
    }

    #[test]
    fn test_times() {
        let price = Price::new(Decimal::new(99900, 2)).unwrap();
        assert_eq!(price.times(3), Decimal::new(299700, 2));
        assert_eq!(price.times(0), Decimal::ZERO);
    }

    #[test]
    fn test_display_two_decimals() {
        let price = Price::new(Decimal::new(7490, 1)).unwrap();
        assert_eq!(price.to_string(), "749.00");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<Price, _> = serde_json::from_str("\"-1.00\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::new(Decimal::new(127999, 2)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
