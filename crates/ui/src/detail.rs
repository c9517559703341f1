//! Product detail page.

use shopfront_catalog::Product;
use shopfront_service::ProductSource;

use shopfront_core::ProductId;

use crate::display::{self, StarRating};
use crate::ports::{NotificationSink, SharePlatform, ShareRequest, Toast};
use crate::route::Route;

/// Explicit page state; no flag/nullable combination can express an invalid
/// mixture like "not loading, no product, no error".
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Found(Product),
    NotFound,
}

/// Detail page view-model. One instance per mounted route; call
/// [`ProductDetailPage::load`] on mount and again whenever the route
/// parameter changes.
#[derive(Debug, Clone)]
pub struct ProductDetailPage {
    state: DetailState,
    image_loading: bool,
}

/// Render data for the whole page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    NotFound { title: String, message: String },
    Found(ProductView),
}

/// Render data for a found product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub category_badge: String,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub image_placeholder: bool,
    pub discount_badge: Option<String>,
    pub out_of_stock_overlay: bool,
    pub stars: StarRating,
    pub rating: f32,
    pub reviews: u32,
    pub price: String,
    /// Struck-through when shown.
    pub original_price: Option<String>,
    /// Present only when the product carries a discount. Falls back to
    /// $0.00 when the original price is missing.
    pub savings_line: Option<String>,
    pub description: String,
    pub cart_enabled: bool,
    pub cart_label: String,
    pub in_stock_banner: bool,
}

impl Default for ProductDetailPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDetailPage {
    pub fn new() -> Self {
        Self {
            state: DetailState::Loading,
            image_loading: true,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Fetch the product for `raw_id` and settle into a terminal state.
    ///
    /// A malformed parameter behaves like a lookup that matches nothing.
    /// Fetch failures are trapped here: logged, surfaced as a notification,
    /// and the page falls back to the not-found state rather than
    /// propagating anything upward.
    pub async fn load<S: ProductSource>(
        &mut self,
        source: &S,
        raw_id: &str,
        notifications: &dyn NotificationSink,
    ) {
        self.state = DetailState::Loading;
        self.image_loading = true;

        let Some(id) = ProductId::parse(raw_id) else {
            self.state = DetailState::NotFound;
            return;
        };

        self.state = match source.fetch_product(id).await {
            Ok(Some(product)) => DetailState::Found(product),
            Ok(None) => DetailState::NotFound,
            Err(error) => {
                tracing::error!(%id, %error, "failed to load product");
                notifications.notify(Toast::destructive(
                    "Error",
                    "Failed to load product details.",
                ));
                DetailState::NotFound
            }
        };
    }

    /// The image finished loading (or failed); drop the placeholder either way.
    pub fn image_settled(&mut self) {
        self.image_loading = false;
    }

    /// Notification-only; there is no backing cart state. Inert unless the
    /// product is loaded and in stock.
    pub fn add_to_cart(&self, notifications: &dyn NotificationSink) {
        if let DetailState::Found(product) = &self.state
            && product.in_stock
        {
            notifications.notify(Toast::info(
                "Added to cart!",
                format!("{} has been added to your cart.", product.name),
            ));
        }
    }

    /// Notification-only; inert unless the product is loaded.
    pub fn add_to_wishlist(&self, notifications: &dyn NotificationSink) {
        if let DetailState::Found(product) = &self.state {
            notifications.notify(Toast::info(
                "Added to wishlist!",
                format!("{} has been added to your wishlist.", product.name),
            ));
        }
    }

    /// Share the page link through the platform capability, falling back to
    /// the clipboard (plus a notification) when sharing is unavailable.
    pub fn share(&self, platform: &dyn SharePlatform, notifications: &dyn NotificationSink) {
        let DetailState::Found(product) = &self.state else {
            return;
        };

        let url = Route::product(product.id).to_path();
        let request = ShareRequest {
            title: product.name.clone(),
            text: product.description.clone(),
            url: url.clone(),
        };

        if !platform.share(&request) {
            // Best effort; the user is notified whether or not the
            // clipboard accepted the link.
            let _ = platform.copy_to_clipboard(&url);
            notifications.notify(Toast::info(
                "Link copied!",
                "Product link has been copied to clipboard.",
            ));
        }
    }

    pub fn view(&self) -> DetailView {
        match &self.state {
            DetailState::Loading => DetailView::Loading,
            DetailState::NotFound => DetailView::NotFound {
                title: "Product Not Found".to_string(),
                message: "The product you're looking for doesn't exist.".to_string(),
            },
            DetailState::Found(p) => DetailView::Found(ProductView {
                category_badge: p.category.clone(),
                name: p.name.clone(),
                brand: p.brand.clone(),
                image: p.image.clone(),
                image_placeholder: self.image_loading,
                discount_badge: display::discount_badge(p),
                out_of_stock_overlay: !p.in_stock,
                stars: display::star_rating(p.rating),
                rating: p.rating,
                reviews: p.reviews,
                price: p.price.to_string(),
                original_price: p.original_price.map(|op| op.to_string()),
                savings_line: p
                    .discount
                    .map(|_| format!("You save {}!", p.savings())),
                description: p.description.clone(),
                cart_enabled: p.in_stock,
                cart_label: if p.in_stock {
                    "Add to Cart".to_string()
                } else {
                    "Out of Stock".to_string()
                },
                in_stock_banner: p.in_stock,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Severity;
    use crate::test_support::{RecordingSink, SharePlatformStub};
    use shopfront_catalog::ProductStore;
    use shopfront_core::{CatalogError, CatalogResult};
    use shopfront_service::{CatalogService, LatencyProfile};
    use std::future::Future;
    use std::sync::Arc;

    fn instant_service() -> CatalogService {
        CatalogService::new(Arc::new(ProductStore::seeded()), LatencyProfile::instant())
    }

    /// Source whose fetch path always rejects.
    struct FailingSource;

    impl ProductSource for FailingSource {
        fn fetch_product(
            &self,
            _id: ProductId,
        ) -> impl Future<Output = CatalogResult<Option<Product>>> + Send {
            async { Err(CatalogError::fetch("connection reset")) }
        }
    }

    #[test]
    fn starts_in_loading() {
        let page = ProductDetailPage::new();
        assert_eq!(page.state(), &DetailState::Loading);
        assert_eq!(page.view(), DetailView::Loading);
    }

    #[tokio::test]
    async fn load_settles_into_found_for_a_known_id() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        page.load(&svc, "3", &toasts).await;
        match page.state() {
            DetailState::Found(p) => assert_eq!(p.name, "UltraBook Pro"),
            other => panic!("expected Found, got {other:?}"),
        }
        assert!(toasts.toasts().is_empty());
    }

    #[tokio::test]
    async fn load_settles_into_not_found_for_an_unknown_id() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        page.load(&svc, "999", &toasts).await;
        assert_eq!(page.state(), &DetailState::NotFound);
        // Rendered as a dedicated empty state, not an error.
        match page.view() {
            DetailView::NotFound { title, .. } => assert_eq!(title, "Product Not Found"),
            other => panic!("expected NotFound view, got {other:?}"),
        }
        assert!(toasts.toasts().is_empty());
    }

    #[tokio::test]
    async fn malformed_id_lands_in_not_found_without_fetching() {
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        // A failing source proves the fetch is never reached.
        page.load(&FailingSource, "not-a-number", &toasts).await;
        assert_eq!(page.state(), &DetailState::NotFound);
        assert!(toasts.toasts().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_is_trapped_and_surfaced_as_a_toast() {
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        page.load(&FailingSource, "3", &toasts).await;
        assert_eq!(page.state(), &DetailState::NotFound);

        let recorded = toasts.toasts();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].title, "Error");
        assert_eq!(recorded[0].description, "Failed to load product details.");
        assert_eq!(recorded[0].severity, Severity::Destructive);
    }

    #[tokio::test]
    async fn reload_replaces_the_previous_state() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        page.load(&svc, "3", &toasts).await;
        assert!(matches!(page.state(), DetailState::Found(_)));

        // Route parameter changed; the last load to resolve wins.
        page.load(&svc, "999", &toasts).await;
        assert_eq!(page.state(), &DetailState::NotFound);
    }

    #[tokio::test]
    async fn cart_and_wishlist_notify_only_when_found() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        // Loading: all actions inert.
        page.add_to_cart(&toasts);
        page.add_to_wishlist(&toasts);
        assert!(toasts.toasts().is_empty());

        page.load(&svc, "1", &toasts).await;
        page.add_to_cart(&toasts);
        page.add_to_wishlist(&toasts);

        let recorded = toasts.toasts();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].title, "Added to cart!");
        assert_eq!(recorded[1].title, "Added to wishlist!");
        assert_eq!(
            recorded[1].description,
            "Wireless Pro Headphones has been added to your wishlist."
        );
    }

    #[tokio::test]
    async fn cart_refuses_out_of_stock_but_wishlist_does_not() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        page.load(&svc, "4", &toasts).await;
        page.add_to_cart(&toasts);
        assert!(toasts.toasts().is_empty());

        page.add_to_wishlist(&toasts);
        assert_eq!(toasts.toasts().len(), 1);
    }

    #[tokio::test]
    async fn share_prefers_the_platform_capability() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let platform = SharePlatformStub::with_native_share();
        let mut page = ProductDetailPage::new();

        page.load(&svc, "3", &toasts).await;
        page.share(&platform, &toasts);

        let shared = platform.shared();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].title, "UltraBook Pro");
        assert_eq!(shared[0].url, "/product/3");
        assert!(platform.copied().is_empty());
        assert!(toasts.toasts().is_empty());
    }

    #[tokio::test]
    async fn share_falls_back_to_the_clipboard_and_notifies() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let platform = SharePlatformStub::without_native_share();
        let mut page = ProductDetailPage::new();

        page.load(&svc, "3", &toasts).await;
        page.share(&platform, &toasts);

        assert_eq!(platform.copied(), vec!["/product/3".to_string()]);
        let recorded = toasts.toasts();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].title, "Link copied!");
    }

    #[tokio::test]
    async fn share_is_inert_outside_found() {
        let toasts = RecordingSink::default();
        let platform = SharePlatformStub::without_native_share();
        let page = ProductDetailPage::new();

        page.share(&platform, &toasts);
        assert!(platform.copied().is_empty());
        assert!(toasts.toasts().is_empty());
    }

    #[tokio::test]
    async fn found_view_derives_savings_and_labels() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        page.load(&svc, "3", &toasts).await;
        let DetailView::Found(view) = page.view() else {
            panic!("expected Found view");
        };
        assert_eq!(view.category_badge, "Computers");
        assert_eq!(view.price, "$1299.99");
        assert_eq!(view.original_price.as_deref(), Some("$1499.99"));
        assert_eq!(view.savings_line.as_deref(), Some("You save $200.00!"));
        assert_eq!(view.stars.filled, 4);
        assert_eq!(view.cart_label, "Add to Cart");
        assert!(view.in_stock_banner);
    }

    #[tokio::test]
    async fn out_of_stock_view_flips_the_labels() {
        let svc = instant_service();
        let toasts = RecordingSink::default();
        let mut page = ProductDetailPage::new();

        page.load(&svc, "4", &toasts).await;
        let DetailView::Found(view) = page.view() else {
            panic!("expected Found view");
        };
        assert!(view.out_of_stock_overlay);
        assert!(!view.cart_enabled);
        assert_eq!(view.cart_label, "Out of Stock");
        assert!(!view.in_stock_banner);
    }

    #[test]
    fn savings_line_falls_back_to_zero_without_original_price() {
        // Discount present but no original price: the line still renders,
        // showing a $0.00 saving. See DESIGN.md.
        let store = ProductStore::seeded();
        let mut product = store.get(ProductId::new(1)).unwrap().clone();
        product.original_price = None;

        let mut page = ProductDetailPage::new();
        page.state = DetailState::Found(product);

        let DetailView::Found(view) = page.view() else {
            panic!("expected Found view");
        };
        assert_eq!(view.savings_line.as_deref(), Some("You save $0.00!"));
    }

    #[test]
    fn no_discount_means_no_savings_line() {
        let store = ProductStore::seeded();
        let mut product = store.get(ProductId::new(1)).unwrap().clone();
        product.discount = None;

        let mut page = ProductDetailPage::new();
        page.state = DetailState::Found(product);

        let DetailView::Found(view) = page.view() else {
            panic!("expected Found view");
        };
        assert_eq!(view.savings_line, None);
    }
}
