//! Filter selection types.

use crate::catalog::{Product, ALL};
use crate::money::{Currency, Money};
use crate::search::{ShopTab, SortKey};
use serde::{Deserialize, Serialize};

/// Upper bound of the default price range, in major units.
pub const DEFAULT_PRICE_CEILING: i64 = 500;

/// A single-select facet: everything, or one named value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Interpret a menu label, where `All` is the no-filter sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL {
            Choice::All
        } else {
            Choice::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Only(value) => value.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl From<String> for Choice {
    fn from(label: String) -> Self {
        Choice::from_label(&label)
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        choice.label().to_string()
    }
}

/// Closed price interval `[low, high]`.
///
/// Deserialized ranges go through [`PriceRange::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPriceRange")]
pub struct PriceRange {
    pub low: Money,
    pub high: Money,
}

#[derive(Deserialize)]
struct RawPriceRange {
    low: Money,
    high: Money,
}

impl From<RawPriceRange> for PriceRange {
    fn from(raw: RawPriceRange) -> Self {
        PriceRange::new(raw.low, raw.high)
    }
}

impl PriceRange {
    /// Build a range, repairing malformed bounds.
    ///
    /// Negative bounds clamp to zero and an inverted range is swapped.
    pub fn new(low: Money, high: Money) -> Self {
        let clamp = |m: Money| Money::new(m.amount_cents.max(0), m.currency);
        let (low, high) = (clamp(low), clamp(high));
        if low.amount_cents > high.amount_cents {
            tracing::warn!(
                low = %low,
                high = %high,
                "inverted price range, swapping bounds"
            );
            return Self {
                low: high,
                high: low,
            };
        }
        Self { low, high }
    }

    /// Range in whole major units (e.g., dollars).
    pub fn major(low: i64, high: i64, currency: Currency) -> Self {
        Self::new(
            Money::from_major(low, currency),
            Money::from_major(high, currency),
        )
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: Money) -> bool {
        self.low.amount_cents <= price.amount_cents && price.amount_cents <= self.high.amount_cents
    }

    pub fn is_default(&self) -> bool {
        self.low.amount_cents == 0
            && self.high.amount_cents
                == Money::from_major(DEFAULT_PRICE_CEILING, self.high.currency).amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::major(0, DEFAULT_PRICE_CEILING, Currency::default())
    }
}

/// Everything the shopper has selected above the product grid.
///
/// The visible product list is a pure function of the catalog and this
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FilterSelection {
    pub category: Choice,
    pub brand: Choice,
    pub price_range: PriceRange,
    pub sort: SortKey,
    pub tab: ShopTab,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default filters on the given tab.
    pub fn for_tab(tab: ShopTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, label: &str) -> Self {
        self.category = Choice::from_label(label);
        self
    }

    pub fn with_brand(mut self, label: &str) -> Self {
        self.brand = Choice::from_label(label);
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_tab(mut self, tab: ShopTab) -> Self {
        self.tab = tab;
        self
    }

    /// Category, brand and price predicates.
    pub fn attributes_match(&self, product: &Product) -> bool {
        self.category.matches(&product.category)
            && self.brand.matches(&product.brand)
            && self.price_range.contains(product.price)
    }

    /// All predicates, including the active tab's.
    pub fn matches(&self, product: &Product) -> bool {
        self.attributes_match(product) && self.tab.matches(product)
    }

    /// Whether any attribute filter differs from its default.
    ///
    /// The sort key is not a filter.
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all() || !self.brand.is_all() || !self.price_range.is_default()
    }

    /// Reset category, brand, range and sort, keeping the tab.
    pub fn clear_filters(&mut self) {
        *self = Self::for_tab(self.tab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: i64) -> Money {
        Money::from_major(amount, Currency::USD)
    }

    #[test]
    fn test_choice_sentinel() {
        assert_eq!(Choice::from_label("All"), Choice::All);
        assert_eq!(
            Choice::from_label("Jackets"),
            Choice::Only("Jackets".to_string())
        );
        assert!(Choice::All.matches("anything"));
        assert!(!Choice::from_label("Jackets").matches("Pants"));
    }

    #[test]
    fn test_choice_serializes_as_label() {
        let json = serde_json::to_string(&Choice::All).unwrap();
        assert_eq!(json, "\"All\"");
        let back: Choice = serde_json::from_str("\"Pants\"").unwrap();
        assert_eq!(back, Choice::Only("Pants".to_string()));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::major(79, 189, Currency::USD);
        assert!(range.contains(usd(79)));
        assert!(range.contains(usd(189)));
        assert!(!range.contains(usd(190)));
        assert!(!range.contains(usd(78)));
    }

    #[test]
    fn test_price_range_repairs_bad_input() {
        let range = PriceRange::new(usd(300), usd(100));
        assert_eq!(range.low, usd(100));
        assert_eq!(range.high, usd(300));

        let range = PriceRange::new(usd(-5), usd(10));
        assert_eq!(range.low, usd(0));
    }

    #[test]
    fn test_deserialized_price_range_is_repaired() {
        let inverted = PriceRange {
            low: usd(300),
            high: usd(100),
        };
        let json = serde_json::to_string(&inverted).unwrap();
        let parsed: PriceRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.low, usd(100));
        assert_eq!(parsed.high, usd(300));

        let negative = PriceRange {
            low: usd(-20),
            high: usd(50),
        };
        let json = serde_json::to_string(&negative).unwrap();
        let parsed: PriceRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.low, usd(0));
    }

    #[test]
    fn test_defaults() {
        let selection = FilterSelection::default();
        assert_eq!(selection.category, Choice::All);
        assert_eq!(selection.brand, Choice::All);
        assert_eq!(selection.price_range, PriceRange::major(0, 500, Currency::USD));
        assert_eq!(selection.sort, SortKey::Featured);
        assert_eq!(selection.tab, ShopTab::Home);
        assert!(!selection.has_active_filters());
    }

    #[test]
    fn test_active_filters_ignore_sort() {
        let selection = FilterSelection::new().with_sort(SortKey::Rating);
        assert!(!selection.has_active_filters());
        assert!(FilterSelection::new().with_brand("Modern Fit").has_active_filters());
        assert!(FilterSelection::new()
            .with_price_range(PriceRange::major(0, 200, Currency::USD))
            .has_active_filters());
    }

    #[test]
    fn test_clear_filters_keeps_tab() {
        let mut selection = FilterSelection::for_tab(ShopTab::Sale)
            .with_category("T-Shirts")
            .with_sort(SortKey::PriceHigh);
        selection.clear_filters();
        assert_eq!(selection, FilterSelection::for_tab(ShopTab::Sale));
    }
}
