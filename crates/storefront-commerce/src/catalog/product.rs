//! Product records.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{discount_percent, Currency, Money};
use serde::{Deserialize, Serialize};

/// Highest rating a product may carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Immutable once loaded into a [`Catalog`](crate::catalog::Catalog); the
/// filter engine only ever borrows it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Compare-at price, only used to show a discount.
    pub original_price: Option<Money>,
    /// Image URIs, first one is the primary image.
    pub images: Vec<String>,
    /// Category name.
    pub category: String,
    /// Brand name.
    pub brand: String,
    pub description: String,
    /// Available sizes in display order.
    pub sizes: Vec<String>,
    /// Available colors in display order.
    pub colors: Vec<String>,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// New-arrival flag.
    pub is_new: bool,
    /// Sale flag.
    pub is_sale: bool,
}

impl Product {
    /// Create a product with the required attributes and empty option lists.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            images: Vec::new(),
            category: category.into(),
            brand: brand.into(),
            description: String::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            rating: 0.0,
            reviews: 0,
            is_new: false,
            is_sale: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_images<S: Into<String>>(mut self, images: impl IntoIterator<Item = S>) -> Self {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<S: Into<String>>(mut self, sizes: impl IntoIterator<Item = S>) -> Self {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Mark as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Mark as on sale.
    pub fn on_sale(mut self) -> Self {
        self.is_sale = true;
        self
    }

    /// Size picked when the shopper does not choose one.
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// Color picked when the shopper does not choose one.
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whole-percent discount against the original price, if any.
    pub fn discount_percent(&self) -> Option<u32> {
        discount_percent(self.price, self.original_price)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Check the record invariants a catalog relies on.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let fail = |what: &str| {
            Err(CommerceError::InvalidCatalog(format!(
                "product {}: {}",
                self.id, what
            )))
        };

        if self.id.as_str().is_empty() {
            return fail("empty id");
        }
        if self.price.is_negative() {
            return fail("negative price");
        }
        if self.images.is_empty() {
            return fail("no images");
        }
        if self.sizes.is_empty() {
            return fail("no sizes");
        }
        if self.colors.is_empty() {
            return fail("no colors");
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return fail("rating outside 0-5");
        }
        Ok(())
    }
}

/// Catalog file form of a product.
///
/// Uses the field names of the storefront's JSON data (`originalPrice`,
/// `isNew`, ...) and plain decimal prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub images: Vec<String>,
    pub category: String,
    pub brand: String,
    #[serde(default)]
    pub description: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sale: Option<bool>,
}

impl ProductRecord {
    /// Convert into a product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: Money::from_decimal(self.price, currency),
            original_price: self
                .original_price
                .map(|p| Money::from_decimal(p, currency)),
            images: self.images,
            category: self.category,
            brand: self.brand,
            description: self.description,
            sizes: self.sizes,
            colors: self.colors,
            rating: self.rating,
            reviews: self.reviews,
            is_new: self.is_new.unwrap_or(false),
            is_sale: self.is_sale.unwrap_or(false),
        }
    }
}

impl From<&Product> for ProductRecord {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            price: p.price.to_decimal(),
            original_price: p.original_price.map(|m| m.to_decimal()),
            images: p.images.clone(),
            category: p.category.clone(),
            brand: p.brand.clone(),
            description: p.description.clone(),
            sizes: p.sizes.clone(),
            colors: p.colors.clone(),
            rating: p.rating,
            reviews: p.reviews,
            is_new: p.is_new.then_some(true),
            is_sale: p.is_sale.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product::new(
            "1",
            "Premium Cotton T-Shirt",
            Money::from_major(79, Currency::USD),
            "T-Shirts",
            "Urban Essentials",
        )
        .with_images(["https://example.com/tee.jpg"])
        .with_sizes(["XS", "S", "M"])
        .with_colors(["Black", "White"])
        .with_rating(4.8, 124)
    }

    #[test]
    fn test_defaults_are_first_options() {
        let p = tee();
        assert_eq!(p.default_size(), Some("XS"));
        assert_eq!(p.default_color(), Some("Black"));
        assert!(p.has_size("M"));
        assert!(!p.has_color("Navy"));
    }

    #[test]
    fn test_validate() {
        assert!(tee().validate().is_ok());
        assert!(tee().with_sizes(Vec::<String>::new()).validate().is_err());
        assert!(tee().with_rating(5.5, 1).validate().is_err());
    }

    #[test]
    fn test_discount() {
        let p = tee().with_original_price(Money::from_major(99, Currency::USD));
        assert_eq!(p.discount_percent(), Some(20));
        assert_eq!(tee().discount_percent(), None);
    }

    #[test]
    fn test_record_json() {
        let json = r#"{
            "id": "8",
            "name": "Leather Crossbody Bag",
            "price": 299,
            "images": ["a.jpg"],
            "category": "Accessories",
            "brand": "Luxury Leather",
            "description": "Bag",
            "sizes": ["One Size"],
            "colors": ["Black", "Brown"],
            "rating": 4.9,
            "reviews": 89,
            "isNew": true
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = record.into_product(Currency::USD);
        assert_eq!(product.price.amount_cents, 29_900);
        assert!(product.is_new);
        assert!(!product.is_sale);
        assert_eq!(product.original_price, None);
    }
}
