//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// Cart transitions never fail; these cover catalog construction and the
/// checkout entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A catalog entry has a zero or negative price.
    #[error("Invalid price for {product_id}: {amount}")]
    InvalidPrice { product_id: String, amount: i64 },

    /// A catalog entry is missing a required field.
    #[error("Invalid product {product_id}: {reason}")]
    InvalidProduct { product_id: String, reason: String },

    /// Checkout is not available yet.
    #[error("Checkout: Coming Soon")]
    CheckoutNotImplemented,
}
