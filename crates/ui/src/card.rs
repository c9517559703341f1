//! Product summary card.

use shopfront_catalog::Product;

use crate::display::{self, StarRating};
use crate::ports::{Navigator, NotificationSink, Toast};
use crate::route::Route;

/// Character budget for the card's description line.
const DESCRIPTION_BUDGET: usize = 80;

/// Whether an event keeps bubbling to enclosing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Propagate,
    Stop,
}

/// Pointer events a card reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// Click anywhere on the card outside the cart button.
    Clicked,
    /// Click on the cart button.
    AddToCartClicked,
}

/// Summary card for one product.
#[derive(Debug, Clone)]
pub struct ProductCard {
    product: Product,
    image_loading: bool,
}

/// Everything the host needs to paint the card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub image: String,
    /// Show a placeholder until the image settles.
    pub image_placeholder: bool,
    pub discount_badge: Option<String>,
    pub out_of_stock_overlay: bool,
    pub name: String,
    pub brand: String,
    /// Truncated to the card's budget.
    pub description: String,
    pub stars: StarRating,
    pub price: String,
    /// Struck-through when shown.
    pub original_price: Option<String>,
    pub cart_enabled: bool,
}

impl ProductCard {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            image_loading: true,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The image finished loading (or failed); drop the placeholder either way.
    pub fn image_settled(&mut self) {
        self.image_loading = false;
    }

    pub fn view(&self) -> CardView {
        let p = &self.product;
        CardView {
            image: p.image.clone(),
            image_placeholder: self.image_loading,
            discount_badge: display::discount_badge(p),
            out_of_stock_overlay: !p.in_stock,
            name: p.name.clone(),
            brand: p.brand.clone(),
            description: display::truncate(&p.description, DESCRIPTION_BUDGET),
            stars: display::star_rating(p.rating),
            price: p.price.to_string(),
            original_price: p.original_price.map(|op| op.to_string()),
            cart_enabled: p.in_stock,
        }
    }

    /// Dispatch a pointer event.
    ///
    /// The cart click must not reach the card click underneath it, so it
    /// always returns [`EventOutcome::Stop`], notification or not.
    pub fn handle(
        &self,
        event: CardEvent,
        navigator: &dyn Navigator,
        notifications: &dyn NotificationSink,
    ) -> EventOutcome {
        match event {
            CardEvent::Clicked => {
                navigator.push(Route::product(self.product.id));
                EventOutcome::Propagate
            }
            CardEvent::AddToCartClicked => {
                if self.product.in_stock {
                    notifications.notify(Toast::info(
                        "Added to cart!",
                        format!("{} has been added to your cart.", self.product.name),
                    ));
                }
                EventOutcome::Stop
            }
        }
    }
}
