//! Render-data derivation shared by the card and detail views.

use shopfront_catalog::Product;

/// Star row: `filled` of `total` stars lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub filled: u8,
    pub total: u8,
}

/// Whole stars only: `floor(rating)` filled out of five.
pub fn star_rating(rating: f32) -> StarRating {
    StarRating {
        filled: rating.clamp(0.0, 5.0).floor() as u8,
        total: 5,
    }
}

/// Badge text for a discount percentage, e.g. `-19% OFF`.
pub fn discount_badge(product: &Product) -> Option<String> {
    product.discount.map(|d| format!("-{d:.0}% OFF"))
}

/// Truncate to at most `budget` characters on a char boundary, appending an
/// ellipsis when anything was cut.
pub fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let mut out: String = text.chars().take(budget).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_floor_the_rating() {
        assert_eq!(star_rating(4.8).filled, 4);
        assert_eq!(star_rating(5.0).filled, 5);
        assert_eq!(star_rating(0.9).filled, 0);
        assert_eq!(star_rating(4.8).total, 5);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
        // Multi-byte chars count as one.
        assert_eq!(truncate("héllo wörld", 5), "héllo…");
    }
}
