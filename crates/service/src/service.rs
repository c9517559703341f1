//! Catalog query service.

use std::future::Future;
use std::sync::Arc;

use shopfront_catalog::{Product, ProductStore};
use shopfront_core::{CatalogResult, ProductId};

use crate::latency::LatencyProfile;

/// Seam the detail view fetches through.
///
/// The in-memory [`CatalogService`] never fails; the `Result` exists so
/// view-models must trap failures from other sources (and so tests can
/// exercise that path with a failing double).
pub trait ProductSource {
    /// Fetch one product by id; `Ok(None)` is the explicit not-found result.
    fn fetch_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = CatalogResult<Option<Product>>> + Send;
}

/// Read-only queries over an immutable [`ProductStore`], each suspended for
/// its configured latency before answering.
///
/// Cheap to clone; the store is shared.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<ProductStore>,
    latency: LatencyProfile,
}

impl CatalogService {
    pub fn new(store: Arc<ProductStore>, latency: LatencyProfile) -> Self {
        Self { store, latency }
    }

    /// Service over `store` with the stock 800/600/500/300 ms delays.
    pub fn with_default_latency(store: Arc<ProductStore>) -> Self {
        Self::new(store, LatencyProfile::default())
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// All products, or only those in `category` (case-insensitive).
    /// Never fails; an unmatched category yields an empty vec.
    pub async fn list_products(&self, category: Option<&str>) -> Vec<Product> {
        tokio::time::sleep(self.latency.list).await;
        let result: Vec<Product> = match category {
            Some(category) => self.store.by_category(category).into_iter().cloned().collect(),
            None => self.store.all().to_vec(),
        };
        tracing::debug!(operation = "list_products", ?category, hits = result.len());
        result
    }

    /// The product with matching id, or `None`.
    pub async fn get_product(&self, id: ProductId) -> Option<Product> {
        tokio::time::sleep(self.latency.get).await;
        let result = self.store.get(id).cloned();
        tracing::debug!(operation = "get_product", %id, found = result.is_some());
        result
    }

    /// Products whose name, brand, or description contains `query`
    /// case-insensitively. The empty query matches everything.
    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        tokio::time::sleep(self.latency.search).await;
        let result: Vec<Product> = self.store.search(query).into_iter().cloned().collect();
        tracing::debug!(operation = "search_products", query, hits = result.len());
        result
    }

    /// Distinct category labels in order of first appearance.
    pub async fn list_categories(&self) -> Vec<String> {
        tokio::time::sleep(self.latency.categories).await;
        let result: Vec<String> = self
            .store
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect();
        tracing::debug!(operation = "list_categories", hits = result.len());
        result
    }
}

impl ProductSource for CatalogService {
    fn fetch_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = CatalogResult<Option<Product>>> + Send {
        async move { Ok(self.get_product(id).await) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn instant_service() -> CatalogService {
        CatalogService::new(Arc::new(ProductStore::seeded()), LatencyProfile::instant())
    }

    #[tokio::test]
    async fn list_without_category_returns_the_full_store() {
        let svc = instant_service();
        let all = svc.list_products(None).await;
        assert_eq!(all, svc.store().all());
    }

    #[tokio::test]
    async fn list_with_category_filters_case_insensitively() {
        let svc = instant_service();
        let audio = svc.list_products(Some("aUdIo")).await;
        let ids: Vec<u32> = audio.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 5]);

        assert!(svc.list_products(Some("Groceries")).await.is_empty());
    }

    #[tokio::test]
    async fn get_product_finds_and_misses() {
        let svc = instant_service();
        let p = svc.get_product(ProductId::new(3)).await.unwrap();
        assert_eq!(p.name, "UltraBook Pro");
        assert!(svc.get_product(ProductId::new(999)).await.is_none());
    }

    #[tokio::test]
    async fn search_products_matches_substring_union() {
        let svc = instant_service();
        let hits = svc.search_products("PRO").await;
        assert!(hits.iter().any(|p| p.name == "Gaming Controller Pro"));

        let everything = svc.search_products("").await;
        assert_eq!(everything.len(), svc.store().len());
    }

    #[tokio::test]
    async fn list_categories_preserves_first_appearance_order() {
        let svc = instant_service();
        assert_eq!(
            svc.list_categories().await,
            vec!["Audio", "Mobile", "Computers", "Wearables", "Gaming"]
        );
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let svc = instant_service();
        assert_eq!(svc.search_products("pro").await, svc.search_products("pro").await);
        assert_eq!(
            svc.get_product(ProductId::new(1)).await,
            svc.get_product(ProductId::new(1)).await
        );
    }

    #[tokio::test(start_paused = true)]
    async fn each_operation_waits_its_configured_delay() {
        let svc =
            CatalogService::with_default_latency(Arc::new(ProductStore::seeded()));

        let start = tokio::time::Instant::now();
        svc.list_products(None).await;
        assert_eq!(start.elapsed(), Duration::from_millis(800));

        let start = tokio::time::Instant::now();
        svc.get_product(ProductId::new(1)).await;
        assert_eq!(start.elapsed(), Duration::from_millis(600));

        let start = tokio::time::Instant::now();
        svc.search_products("pro").await;
        assert_eq!(start.elapsed(), Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        svc.list_categories().await;
        assert_eq!(start.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn calls_suspend_without_serializing_each_other() {
        let svc =
            CatalogService::with_default_latency(Arc::new(ProductStore::seeded()));

        let start = tokio::time::Instant::now();
        let (all, categories) = tokio::join!(svc.list_products(None), svc.list_categories());
        // Overlapping awaits share the clock; 800 ms total, not 1100.
        assert_eq!(start.elapsed(), Duration::from_millis(800));
        assert_eq!(all.len(), 6);
        assert_eq!(categories.len(), 5);
    }

    #[tokio::test]
    async fn fetch_product_wraps_lookup_in_ok() {
        let svc = instant_service();
        assert!(matches!(svc.fetch_product(ProductId::new(3)).await, Ok(Some(_))));
        assert!(matches!(svc.fetch_product(ProductId::new(999)).await, Ok(None)));
    }
}
