//! Order records shown in the admin console.

use chrono::NaiveDate;

use crate::ids::OrderId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Statuses in the order the status picker lists them.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    /// Unit price at the time of the order.
    pub price: Money,
    pub size: String,
    pub color: String,
}

impl OrderItem {
    pub fn subtotal(&self) -> Money {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order number, e.g. `#1234`.
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    /// Sum of item subtotals, fixed when the order is created.
    pub total: Money,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    pub shipping_address: String,
}

impl Order {
    /// Create a pending order; the total is computed from `items`.
    pub fn new(
        id: OrderId,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        items: Vec<OrderItem>,
        shipping_address: impl Into<String>,
        order_date: NaiveDate,
    ) -> Self {
        let currency = items
            .first()
            .map(|i| i.price.currency)
            .unwrap_or(Currency::USD);
        let total = items
            .iter()
            .fold(Money::zero(currency), |acc, i| acc + i.subtotal());

        Self {
            id,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            items,
            total,
            status: OrderStatus::Pending,
            order_date,
            shipping_address: shipping_address.into(),
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Get total item count.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Case-insensitive match on order number, customer name or email.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.as_str().to_lowercase().contains(&term)
            || self.customer_name.to_lowercase().contains(&term)
            || self.customer_email.to_lowercase().contains(&term)
    }
}

/// Status picker of the orders screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// `all` or a status name.
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(StatusFilter::All);
        }
        OrderStatus::from_str(s).map(StatusFilter::Only)
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Search box plus status picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuery {
    pub term: String,
    pub status: StatusFilter,
}

impl OrderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        order.matches_term(&self.term) && self.status.matches(order.status)
    }
}

/// Orders matching `query`, in list order.
pub fn filter_orders<'a>(orders: &'a [Order], query: &OrderQuery) -> Vec<&'a Order> {
    orders.iter().filter(|o| query.matches(o)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_status_parsing() {
        assert_eq!(OrderStatus::from_str("Shipped"), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::from_str("refunded"), None);
        assert_eq!(StatusFilter::from_str("ALL"), Some(StatusFilter::All));
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_search_matches_id_name_email() {
        let orders = seed::orders();
        let ids = |q: &OrderQuery| -> Vec<String> {
            filter_orders(&orders, q).iter().map(|o| o.id.to_string()).collect()
        };

        assert_eq!(ids(&OrderQuery::new().with_term("1236")), vec!["#1236"]);
        assert_eq!(ids(&OrderQuery::new().with_term("JANE")), vec!["#1235"]);
        assert_eq!(ids(&OrderQuery::new().with_term("wilson@")), vec!["#1237"]);
        assert_eq!(ids(&OrderQuery::new()).len(), 4);
    }

    #[test]
    fn test_status_filter() {
        let orders = seed::orders();
        let query = OrderQuery::new().with_status(OrderStatus::Pending);
        let found = filter_orders(&orders, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].customer_name, "Sarah Wilson");

        let query = OrderQuery::new().with_term("john").with_status(OrderStatus::Shipped);
        let found = filter_orders(&orders, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "#1236");
    }

    #[test]
    fn test_order_total() {
        let order = &seed::orders()[1];
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total, Money::from_major(498, Currency::USD));
    }
}
