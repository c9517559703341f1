//! `shopfront-service` — the read-only catalog service.
//!
//! An async façade over [`shopfront_catalog::ProductStore`] that simulates
//! remote round-trip time with a configurable per-operation delay.

pub mod latency;
pub mod service;

pub use latency::LatencyProfile;
pub use service::{CatalogService, ProductSource};
