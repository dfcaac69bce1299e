//! Admin console: product, category, brand and order management.

mod console;
mod drafts;
mod orders;

pub use console::{AdminConsole, AdminSection, DashboardStats, RECENT_ORDERS};
pub use drafts::{BrandDraft, CategoryDraft, ProductDraft};
pub use orders::{filter_orders, Order, OrderItem, OrderQuery, OrderStatus, StatusFilter};
