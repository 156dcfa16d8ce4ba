//! Checkout entry point.
//!
//! Payment is not wired up yet. `checkout` always reports that and leaves the
//! cart untouched; callers surface the error text to the shopper.

use crate::cart::CartState;
use crate::error::CommerceError;

/// Text shown to the shopper when they try to check out.
pub const CHECKOUT_NOTICE: &str = "Checkout: Coming Soon";

/// Start checkout for a cart.
///
/// Always returns [`CommerceError::CheckoutNotImplemented`].
pub fn checkout(cart: &CartState) -> Result<(), CommerceError> {
    tracing::warn!(
        items = cart.len(),
        total_count = cart.total_count(),
        "checkout requested but not available"
    );
    Err(CommerceError::CheckoutNotImplemented)
}
