//! Sort keys for the product grid.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort options offered above the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// New arrivals first. Not a timestamp sort: it only lifts `is_new`.
    Newest,
}

impl SortKey {
    /// Options in the order the sort menu lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let slug = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    /// Reorder in place.
    ///
    /// Every arm is a stable sort, so products with equal keys keep their
    /// relative order.
    pub fn apply(&self, products: &mut [&Product]) {
        match self {
            SortKey::Featured => {}
            SortKey::PriceLow => products.sort_by_key(|p| p.price.amount_cents),
            SortKey::PriceHigh => {
                products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
            }
            SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Newest => products.sort_by_key(|p| !p.is_new),
        }
    }
}
