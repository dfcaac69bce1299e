//! Brand records managed from the admin console.

use crate::catalog::category::name_matches;
use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// A brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    /// Brand name, as used on products.
    pub name: String,
    pub description: String,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Number of products carrying this brand.
    pub product_count: usize,
}

impl Brand {
    pub fn new(id: BrandId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            logo: None,
            product_count: 0,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn matches(&self, term: &str) -> bool {
        name_matches(&self.name, term)
    }
}
