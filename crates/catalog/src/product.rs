//! Product record.

use serde::{Deserialize, Serialize};

use shopfront_core::{Price, ProductId};

/// A catalog entry with pricing, availability, and descriptive metadata.
///
/// Records are plain read models: the catalog is seeded once and never
/// mutated, so there is no command surface here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub description: String,
    /// Price in cents.
    pub price: Price,
    /// Pre-discount price in cents; when present, must be >= `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Informational discount percentage in [0, 100]. Never derived from or
    /// validated against the price difference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f32>,
    /// Static asset reference.
    pub image: String,
    /// Free-text grouping label.
    pub category: String,
    pub in_stock: bool,
    /// Average rating in [0, 5].
    pub rating: f32,
    /// Review count.
    pub reviews: u32,
}

impl Product {
    /// Amount saved versus the pre-discount price, zero when there is none.
    pub fn savings(&self) -> Price {
        self.original_price
            .unwrap_or(Price::ZERO)
            .saturating_sub(self.price)
    }
}
