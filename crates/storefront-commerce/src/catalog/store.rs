//! The catalog store: the product list plus derived option lists.

use std::collections::HashSet;

use crate::catalog::{Product, ProductRecord};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::seed;

/// Sentinel option meaning "no filter" in category and brand lists.
pub const ALL: &str = "All";

/// An immutable, ordered set of products.
///
/// Catalog order is the "featured" order the filter engine preserves.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    brands: Vec<String>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog, validating every record.
    ///
    /// Category and brand lists are derived in first-seen order.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();
        let categories = distinct(products.iter().map(|p| p.category.as_str()));
        let brands = distinct(products.iter().map(|p| p.brand.as_str()));

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            brands = brands.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            categories,
            brands,
            currency,
        })
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::from_products(
            records
                .into_iter()
                .map(|r| r.into_product(currency))
                .collect(),
        )
    }

    /// The built-in demo catalog.
    pub fn seed() -> Self {
        Self::from_products(seed::products()).unwrap_or_else(|err| {
            tracing::error!(error = %err, "built-in catalog is invalid, starting empty");
            Self::empty()
        })
    }

    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            brands: Vec::new(),
            currency: Currency::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Category filter options, `All` first.
    pub fn category_options(&self) -> Vec<&str> {
        with_sentinel(&self.categories)
    }

    /// Brand filter options, `All` first.
    pub fn brand_options(&self) -> Vec<&str> {
        with_sentinel(&self.brands)
    }

    /// Serialize back to the JSON catalog format.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        let records: Vec<ProductRecord> = self.products.iter().map(ProductRecord::from).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

fn with_sentinel(names: &[String]) -> Vec<&str> {
    std::iter::once(ALL)
        .chain(names.iter().map(String::as_str))
        .collect()
}
