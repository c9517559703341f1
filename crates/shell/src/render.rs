//! Plain-text rendering of the view-model render data.

use shopfront_ui::{CardView, DetailView, StarRating};

fn stars(rating: StarRating) -> String {
    let mut out = String::new();
    for i in 0..rating.total {
        out.push(if i < rating.filled { '★' } else { '☆' });
    }
    out
}

pub fn card(view: &CardView) {
    let mut headline = view.name.clone();
    if let Some(badge) = &view.discount_badge {
        headline.push_str(&format!("  [{badge}]"));
    }
    if view.out_of_stock_overlay {
        headline.push_str("  [OUT OF STOCK]");
    }
    println!("  {headline}");
    println!("    {}  {}", view.brand, stars(view.stars));
    println!("    {}", view.description);
    match &view.original_price {
        Some(original) => println!("    {}  (was {original})", view.price),
        None => println!("    {}", view.price),
    }
    if !view.cart_enabled {
        println!("    cart unavailable");
    }
    println!();
}

pub fn detail(view: &DetailView) {
    match view {
        DetailView::Loading => println!("Loading product details..."),
        DetailView::NotFound { title, message } => {
            println!("{title}");
            println!("{message}");
        }
        DetailView::Found(v) => {
            println!("[{}]", v.category_badge);
            let mut headline = v.name.clone();
            if let Some(badge) = &v.discount_badge {
                headline.push_str(&format!("  [{badge}]"));
            }
            if v.out_of_stock_overlay {
                headline.push_str("  [OUT OF STOCK]");
            }
            println!("{headline}");
            println!("{}", v.brand);
            println!("{}  {} ({} reviews)", stars(v.stars), v.rating, v.reviews);
            match &v.original_price {
                Some(original) => println!("{}  (was {original})", v.price),
                None => println!("{}", v.price),
            }
            if let Some(savings) = &v.savings_line {
                println!("{savings}");
            }
            println!();
            println!("{}", v.description);
            println!();
            println!("[{}]  [wishlist]  [share]", v.cart_label);
            if v.in_stock_banner {
                println!("✓ In stock and ready to ship");
            }
        }
    }
}
