//! Navigation convention shared with the host application.

use shopfront_core::ProductId;

/// The two routes of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Product listing, optionally filtered by category.
    Catalog { category: Option<String> },
    /// Detail page for one product.
    Product(ProductId),
}

impl Route {
    pub fn catalog() -> Self {
        Route::Catalog { category: None }
    }

    pub fn product(id: ProductId) -> Self {
        Route::Product(id)
    }

    /// Parse a path into a route. Total: unknown or malformed paths yield
    /// `None` rather than an error.
    pub fn parse(path: &str) -> Option<Route> {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        match path.trim_end_matches('/') {
            "" => {
                let category = query
                    .and_then(|q| q.split('&').find_map(|kv| kv.strip_prefix("category=")))
                    .filter(|c| !c.is_empty())
                    .map(str::to_string);
                Some(Route::Catalog { category })
            }
            p => {
                let raw_id = p.strip_prefix("/product/")?;
                ProductId::parse(raw_id).map(Route::Product)
            }
        }
    }

    /// Canonical path for this route; inverse of [`Route::parse`].
    pub fn to_path(&self) -> String {
        match self {
            Route::Catalog { category: None } => "/".to_string(),
            Route::Catalog {
                category: Some(category),
            } => format!("/?category={category}"),
            Route::Product(id) => format!("/product/{id}"),
        }
    }
}
