//! Category records managed from the admin console.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// Products reference categories by name; `product_count` is derived by the
/// admin console from its product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name, as used on products.
    pub name: String,
    pub description: String,
    /// Number of products in this category.
    pub product_count: usize,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            product_count: 0,
        }
    }

    /// Case-insensitive substring match on the name.
    pub fn matches(&self, term: &str) -> bool {
        name_matches(&self.name, term)
    }
}

/// Case-insensitive substring match used by the admin search boxes.
pub(crate) fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let c = Category::new(CategoryId::new("c1"), "T-Shirts", "Tees");
        assert!(c.matches("shirt"));
        assert!(c.matches("T-SH"));
        assert!(c.matches(""));
        assert!(!c.matches("jacket"));
    }
}
