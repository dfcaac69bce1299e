//! Cart ledger and line keys.

use std::fmt;

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Identity of a cart line: one product in one size and color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
}

impl LineKey {
    pub fn new(
        product_id: impl Into<ProductId>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

/// Renders as `{product}-{size}-{color}`, the key the cart panel uses.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.product_id, self.size, self.color)
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product as it was when first added.
    pub product: Product,
    pub size: String,
    pub color: String,
    /// Always positive while the line exists.
    pub quantity: i64,
}

impl CartLine {
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id.clone(), self.size.clone(), self.color.clone())
    }

    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_mul(self.quantity)
    }

    fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id && self.size == key.size && self.color == key.color
    }
}

/// Result of pressing checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// No order processing exists behind the button.
    Unavailable,
}

/// The shopping cart: a map from (product, size, color) to quantity.
///
/// Lines keep insertion order. Every operation is total; unknown keys are
/// ignored rather than reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// A missing (or blank) size or color resolves to the product's first
    /// listed option. Adding an existing line bumps its quantity by one.
    pub fn add_item(
        &mut self,
        product: &Product,
        size: Option<&str>,
        color: Option<&str>,
    ) -> LineKey {
        let size = resolve(size, product.default_size());
        let color = resolve(color, product.default_color());
        let key = LineKey::new(product.id.clone(), size, color);

        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(&key)) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::info!(line = %key, quantity = line.quantity, "cart line incremented");
            return key;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            size: key.size.clone(),
            color: key.color.clone(),
            quantity: 1,
        });
        tracing::info!(line = %key, "cart line added");
        key
    }

    /// Replace a line's quantity; zero or below removes the line.
    ///
    /// Returns whether a line was changed.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(key);
        }

        match self.lines.iter_mut().find(|l| l.matches(key)) {
            Some(line) => {
                line.quantity = quantity;
                tracing::info!(line = %key, quantity, "cart quantity set");
                true
            }
            None => false,
        }
    }

    /// Delete a line. Absent keys are a no-op.
    pub fn remove_item(&mut self, key: &LineKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| !l.matches(key));
        let removed = self.lines.len() < before;
        if removed {
            tracing::info!(line = %key, "cart line removed");
        }
        removed
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency()), |acc, l| acc + l.subtotal())
    }

    /// Total units in the cart (the header badge).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(key))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Per-line breakdown plus totals.
    pub fn summary(&self) -> CartSummary {
        let currency = self.currency();
        let lines: Vec<LineSummary> = self
            .lines
            .iter()
            .map(|l| LineSummary {
                key: l.key(),
                product_name: l.product.name.clone(),
                unit_price: l.unit_price(),
                quantity: l.quantity,
                subtotal: l.subtotal(),
            })
            .collect();
        let savings = self
            .lines
            .iter()
            .filter_map(|l| {
                let original = l.product.original_price?;
                let per_unit = original.amount_cents - l.product.price.amount_cents;
                (per_unit > 0).then(|| Money::new(per_unit, currency).saturating_mul(l.quantity))
            })
            .fold(Money::zero(currency), |acc, m| acc + m);

        CartSummary {
            total: Money::sum(lines.iter().map(|l| &l.subtotal), currency),
            item_count: self.item_count(),
            savings,
            lines,
        }
    }

    /// Placeholder for the checkout button.
    pub fn checkout(&self) -> CheckoutOutcome {
        tracing::info!(
            lines = self.lines.len(),
            total = %self.total(),
            "checkout requested, no order processing configured"
        );
        CheckoutOutcome::Unavailable
    }

    fn currency(&self) -> Currency {
        self.lines
            .first()
            .map(|l| l.product.price.currency)
            .unwrap_or_default()
    }
}

fn resolve(choice: Option<&str>, fallback: Option<&str>) -> String {
    choice
        .filter(|c| !c.is_empty())
        .or(fallback)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product::new("1", "Tee", Money::from_major(79, Currency::USD), "T-Shirts", "A")
            .with_original_price(Money::from_major(99, Currency::USD))
            .with_images(["tee.jpg"])
            .with_sizes(["XS", "S", "M"])
            .with_colors(["Black", "White"])
    }

    fn jacket() -> Product {
        Product::new("2", "Jacket", Money::from_major(189, Currency::USD), "Jackets", "B")
            .with_images(["jacket.jpg"])
            .with_sizes(["M", "L"])
            .with_colors(["Blue"])
    }

    #[test]
    fn test_same_triple_increments() {
        let mut cart = CartLedger::new();
        let a = cart.add_item(&tee(), Some("M"), Some("Black"));
        let b = cart.add_item(&tee(), Some("M"), Some("Black"));

        assert_eq!(a, b);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(&a).unwrap().quantity, 2);
        assert_eq!(cart.total(), Money::from_major(158, Currency::USD));
    }

    #[test]
    fn test_distinct_triples_get_distinct_lines() {
        let mut cart = CartLedger::new();
        cart.add_item(&tee(), Some("M"), Some("Black"));
        cart.add_item(&tee(), Some("M"), Some("White"));
        cart.add_item(&tee(), Some("S"), Some("Black"));
        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_missing_options_resolve_to_first() {
        let mut cart = CartLedger::new();
        let key = cart.add_item(&tee(), None, Some(""));
        assert_eq!(key, LineKey::new("1", "XS", "Black"));
        assert_eq!(key.to_string(), "1-XS-Black");

        let again = cart.add_item(&tee(), Some("XS"), Some("Black"));
        assert_eq!(again, key);
        assert_eq!(cart.line(&key).unwrap().quantity, 2);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartLedger::new();
        let key = cart.add_item(&jacket(), None, None);
        assert!(cart.set_quantity(&key, 5));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Money::from_major(945, Currency::USD));
        assert!(!cart.set_quantity(&LineKey::new("9", "M", "Red"), 3));
    }

    #[test]
    fn test_zero_quantity_equals_remove() {
        let mut by_zero = CartLedger::new();
        let mut by_remove = CartLedger::new();
        for cart in [&mut by_zero, &mut by_remove] {
            cart.add_item(&tee(), None, None);
            cart.add_item(&jacket(), None, None);
        }
        let key = LineKey::new("1", "XS", "Black");

        by_zero.set_quantity(&key, 0);
        by_remove.remove_item(&key);

        assert_eq!(by_zero, by_remove);
        assert_eq!(by_zero.total(), Money::from_major(189, Currency::USD));
    }

    #[test]
    fn test_negative_quantity_removes() {
        let mut cart = CartLedger::new();
        let key = cart.add_item(&tee(), None, None);
        assert!(cart.set_quantity(&key, -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartLedger::new();
        cart.add_item(&tee(), None, None);
        let before = cart.clone();
        assert!(!cart.remove_item(&LineKey::new("1", "XL", "Black")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_empty_total_is_zero() {
        assert!(CartLedger::new().total().is_zero());
    }

    #[test]
    fn test_summary() {
        let mut cart = CartLedger::new();
        let key = cart.add_item(&tee(), None, None);
        cart.set_quantity(&key, 3);
        cart.add_item(&jacket(), None, None);

        let summary = cart.summary();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.total, Money::from_major(3 * 79 + 189, Currency::USD));
        assert_eq!(summary.savings, Money::from_major(60, Currency::USD));
        assert_eq!(summary.total, cart.total());
    }

    #[test]
    fn test_checkout_is_placeholder() {
        let mut cart = CartLedger::new();
        cart.add_item(&tee(), None, None);
        assert_eq!(cart.checkout(), CheckoutOutcome::Unavailable);
        assert_eq!(cart.lines().len(), 1);
    }
}
