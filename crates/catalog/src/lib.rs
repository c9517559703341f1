//! `shopfront-catalog` — the product record, the immutable store, and the
//! pure query logic over it.

pub mod fixtures;
pub mod product;
pub mod store;

pub use product::Product;
pub use store::ProductStore;
