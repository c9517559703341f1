//! `shopfront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no async, no IO).

pub mod error;
pub mod id;
pub mod price;

pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
pub use price::Price;
