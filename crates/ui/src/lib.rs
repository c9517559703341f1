//! `shopfront-ui` — headless view-models for the storefront.
//!
//! Views here derive render data and drive the platform ports; actual
//! presentation (widgets, toasts, icons) lives behind the traits in
//! [`ports`].

pub mod card;
pub mod detail;
pub mod display;
pub mod ports;
pub mod route;

pub use card::{CardEvent, CardView, EventOutcome, ProductCard};
pub use detail::{DetailState, DetailView, ProductDetailPage, ProductView};
pub use display::StarRating;
pub use ports::{Navigator, NotificationSink, SharePlatform, ShareRequest, Severity, Toast};
pub use route::Route;

#[cfg(test)]
pub(crate) mod test_support;
