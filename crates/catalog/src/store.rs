//! Immutable product store and the pure queries over it.

use shopfront_core::{CatalogError, CatalogResult, ProductId};

use crate::fixtures;
use crate::product::Product;

/// The in-memory catalog, validated once at construction and read-only
/// afterwards.
///
/// There is deliberately no module-level singleton: callers construct a
/// store (seeded or from a fixture) and hand it to the query layer, which
/// keeps tests isolated on alternate fixtures.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Build a store, enforcing catalog invariants.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            validate(product)?;
            if !seen.insert(product.id) {
                return Err(CatalogError::invariant(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Deserialize an alternate fixture (JSON array of products) and
    /// validate it like any other catalog.
    pub fn from_json(bytes: &[u8]) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_slice(bytes)
            .map_err(|e| CatalogError::validation(format!("fixture parse: {e}")))?;
        Self::new(products)
    }

    /// The shipped demo catalog.
    pub fn seeded() -> Self {
        Self::new(fixtures::seeded()).expect("seed fixture satisfies catalog invariants")
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Every product, in seed order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose category equals `category` case-insensitively.
    /// An unmatched category yields an empty vec, never an error.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        let needle = category.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.category.to_lowercase() == needle)
            .collect()
    }

    /// Products whose name, brand, or description contains `query`
    /// case-insensitively. The empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Distinct category labels, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for product in &self.products {
            if !out.contains(&product.category.as_str()) {
                out.push(&product.category);
            }
        }
        out
    }
}

fn validate(product: &Product) -> CatalogResult<()> {
    if product.id.get() == 0 {
        return Err(CatalogError::validation("product id must be positive"));
    }
    if product.name.trim().is_empty() {
        return Err(CatalogError::validation(format!(
            "product {}: name cannot be empty",
            product.id
        )));
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(CatalogError::validation(format!(
            "product {}: rating {} out of [0, 5]",
            product.id, product.rating
        )));
    }
    if let Some(discount) = product.discount
        && !(0.0..=100.0).contains(&discount)
    {
        return Err(CatalogError::validation(format!(
            "product {}: discount {discount} out of [0, 100]",
            product.id
        )));
    }
    if let Some(original) = product.original_price
        && original < product.price
    {
        return Err(CatalogError::invariant(format!(
            "product {}: original price {original} below price {}",
            product.id, product.price
        )));
    }
    Ok(())
}
