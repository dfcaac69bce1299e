//! Form models for the admin editors.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Product editor contents.
///
/// Prices are plain decimals as typed. An `original_price` of zero or less
/// means "no compare-at price".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub original_price: f64,
    pub images: Vec<String>,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    pub is_new: bool,
    pub is_sale: bool,
}

impl ProductDraft {
    /// An empty form, with one blank row in each list editor.
    pub fn new() -> Self {
        Self {
            images: vec![String::new()],
            sizes: vec![String::new()],
            colors: vec![String::new()],
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_original_price(mut self, price: f64) -> Self {
        self.original_price = price;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
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

    /// Check the required text fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let required = [
            ("name", &self.name),
            ("category", &self.category),
            ("brand", &self.brand),
            ("description", &self.description),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CommerceError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Build the product this form submits.
    pub fn into_product(self, id: ProductId, currency: Currency) -> Result<Product, CommerceError> {
        self.validate()?;

        let mut product = Product::new(
            id,
            self.name,
            Money::from_decimal(self.price, currency),
            self.category,
            self.brand,
        )
        .with_description(self.description)
        .with_images(non_blank(self.images))
        .with_sizes(non_blank(self.sizes))
        .with_colors(non_blank(self.colors))
        .with_rating(self.rating, self.reviews);

        if self.original_price > 0.0 {
            product = product.with_original_price(Money::from_decimal(self.original_price, currency));
        }
        product.is_new = self.is_new;
        product.is_sale = self.is_sale;
        Ok(product)
    }
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            price: p.price.to_decimal(),
            original_price: p.original_price.map(|m| m.to_decimal()).unwrap_or(0.0),
            images: p.images.clone(),
            category: p.category.clone(),
            brand: p.brand.clone(),
            description: p.description.clone(),
            sizes: p.sizes.clone(),
            colors: p.colors.clone(),
            rating: p.rating,
            reviews: p.reviews,
            is_new: p.is_new,
            is_sale: p.is_sale,
        }
    }
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.trim().is_empty()).collect()
}

/// Category editor contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        require_name(&self.name)
    }
}

/// Brand editor contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BrandDraft {
    pub name: String,
    pub description: String,
    /// Logo URL; blank means none.
    pub logo: String,
}

impl BrandDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            logo: String::new(),
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        require_name(&self.name)
    }

    pub(crate) fn logo(&self) -> Option<String> {
        let logo = self.logo.trim();
        (!logo.is_empty()).then(|| logo.to_string())
    }
}

fn require_name(name: &str) -> Result<(), CommerceError> {
    if name.trim().is_empty() {
        return Err(CommerceError::MissingField("name"));
    }
    Ok(())
}
