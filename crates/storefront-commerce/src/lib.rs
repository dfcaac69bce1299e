//! Storefront domain types and logic.
//!
//! This crate holds everything behind the storefront's screens:
//!
//! - **Catalog**: Products, the catalog store, category and brand records
//! - **Search**: Tabs, attribute filters, sort keys and the filter/sort engine
//! - **Cart**: The cart ledger and its summary
//! - **Storefront**: A shopper session (selection, cart, quick view, panels)
//! - **Admin**: Product, category, brand and order management, dashboard
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut store = Storefront::new(Catalog::seed());
//! store.change_tab(ShopTab::NewArrivals);
//! store.set_sort(SortKey::PriceHigh);
//! let first = store.visible_products()[0].id.clone();
//!
//! store.add_to_cart(&first, Some("M"), None).unwrap();
//! println!("Total: {}", store.cart_total().display());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod seed;

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{discount_percent, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{discount_percent, Currency, Money};

    // Catalog
    pub use crate::catalog::{Brand, Catalog, Category, Product, ProductRecord, ALL};

    // Search
    pub use crate::search::{
        filter_products, visible_products, Choice, FilterSelection, PriceRange, ShopTab,
        SortKey,
    };

    // Cart
    pub use crate::cart::{CartLedger, CartLine, CartSummary, CheckoutOutcome, LineKey};

    // Storefront
    pub use crate::storefront::{FormModal, Storefront, ViewState};

    // Admin
    pub use crate::admin::{
        AdminConsole, AdminSection, BrandDraft, CategoryDraft, DashboardStats, Order,
        OrderItem, OrderQuery, OrderStatus, ProductDraft, StatusFilter,
    };
}
