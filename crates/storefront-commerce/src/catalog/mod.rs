//! Catalog module.
//!
//! Contains products, the catalog store, and the category/brand records
//! managed from the admin console.

mod brand;
mod category;
mod product;
mod store;

pub use brand::Brand;
pub use category::Category;
pub use product::{Product, ProductRecord, MAX_RATING};
pub use store::{Catalog, ALL};
