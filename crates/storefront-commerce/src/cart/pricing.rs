//! Cart summary shown in the cart panel.

use crate::cart::LineKey;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the cart panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Units across all lines.
    pub item_count: i64,
    /// Sum of line subtotals at current prices.
    pub total: Money,
    /// Amount saved against original prices.
    pub savings: Money,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn has_savings(&self) -> bool {
        self.savings.amount_cents > 0
    }
}

/// One line of the summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    pub key: LineKey,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price × quantity
    pub subtotal: Money,
}
