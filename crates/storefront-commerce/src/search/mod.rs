//! Search module.
//!
//! The filter/sort engine: attribute filters, storefront tabs, sort keys
//! and the pipeline that turns a catalog and a selection into the visible
//! product list.

mod engine;
mod filter;
mod sort;
mod tab;

pub use engine::{filter_products, visible_products};
pub use filter::{Choice, FilterSelection, PriceRange, DEFAULT_PRICE_CEILING};
pub use sort::SortKey;
pub use tab::{ShopTab, TabRule, TAB_RULES};
