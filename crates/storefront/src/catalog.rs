//! Product catalog types.
//!
//! The cart consumes [`Product`] snapshots verbatim at add-time and never
//! queries the catalog back, so this module is just the snapshot shape
//! plus the built-in demo catalog the storefront ships with.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use karoo_core::{Price, ProductId};

/// Colour options offered for every demo product.
pub const COLOURS: &[&str] = &["Black", "White", "Ocean"];

/// A catalog product snapshot.
///
/// Descriptive and pricing fields are captured into the cart at add-time;
/// later catalog changes never reach existing line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Opaque catalog identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Short marketing description.
    pub description: String,
    /// Unit price at the time of the snapshot.
    pub unit_price: Price,
    /// Image reference, if the product has one.
    pub image: Option<String>,
}

impl Product {
    /// Create a product snapshot.
    #[must_use]
    pub fn new(id: ProductId, title: impl Into<String>, unit_price: Price) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            unit_price,
            image: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// The built-in demo catalog.
///
/// Prices are in Rand; `cents` keeps the table below readable.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    let price = |cents: i64| {
        // Demo prices are fixed non-negative constants.
        Price::new(Decimal::new(cents, 2)).unwrap_or(Price::ZERO)
    };
    let entries: [(i32, &str, &str, i64, &str); 10] = [
        (
            1,
            "Ray-Ban Sunglasses",
            "Classic wayfarer silhouette with polarized UV400 lenses.",
            99_900,
            "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=600&h=400&fit=crop",
        ),
        (
            2,
            "Polaroid Film Camera",
            "Instant analog joy with auto flash and simple controls.",
            199_900,
            "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=600&h=400&fit=crop",
        ),
        (
            3,
            "Premium Headphones",
            "Over-ear noise cancelling with 40 mm drivers and 30-hour battery.",
            249_900,
            "https://images.unsplash.com/photo-1583394838336-acd977736f90?w=600&h=400&fit=crop",
        ),
        (
            4,
            "Atlas Watch",
            "Stainless fitness watch with OLED display, GPS, and heart-rate tracking.",
            269_900,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=600&h=400&fit=crop",
        ),
        (
            5,
            "Artisans Camera Lens",
            "High quality second-hand camera lens for photography enthusiasts.",
            119_900,
            "https://images.unsplash.com/photo-1640533493858-f03ed7cb18b8?w=600&h=400&fit=crop",
        ),
        (
            6,
            "Premium French Deodorant",
            "Aluminum-free scent with bergamot and cedar.",
            27_900,
            "https://images.unsplash.com/photo-1620917669788-be691b2db72a?w=600&h=400&fit=crop",
        ),
        (
            7,
            "PUMA Shoes",
            "Lightweight trainers with breathable mesh and a cushioned midsole.",
            139_900,
            "https://images.unsplash.com/photo-1545289414-1c3cb1c06238?w=600&h=400&fit=crop",
        ),
        (
            8,
            "JBL Headset",
            "Clear voice boom mic, punchy bass, and memory-foam comfort.",
            149_900,
            "https://images.unsplash.com/photo-1579065560489-989b0cc394ce?w=600&h=400&fit=crop",
        ),
        (
            9,
            "Apple Watch",
            "Always-on display, advanced fitness tracking, and crash detection.",
            499_900,
            "https://images.unsplash.com/photo-1624096104992-9b4fa3a279dd?w=600&h=400&fit=crop",
        ),
        (
            10,
            "Premium Iris Sunnies",
            "Oversized gradient lenses with anti-glare coating.",
            74_900,
            "https://images.unsplash.com/photo-1584036553516-bf83210aa16c?w=600&h=400&fit=crop",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, title, description, cents, image)| {
            Product::new(ProductId::new(id), title, price(cents))
                .with_description(description)
                .with_image(image)
        })
        .collect()
}
