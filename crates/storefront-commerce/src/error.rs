//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront and admin operations.
///
/// The filter/sort engine and the cart ledger are total and never produce
/// these; they come from id lookups, catalog loading and admin form checks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Brand not found.
    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// A required form field was left blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Catalog input rejected.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommerceError::ProductNotFound("42".into()).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            CommerceError::MissingField("name").to_string(),
            "Missing required field: name"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CommerceError = err.into();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }
}
