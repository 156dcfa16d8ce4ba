//! Catalog, cart and pricing types for the Leafy Lane storefront.
//!
//! This crate holds everything the storefront knows about money and goods:
//!
//! - **Catalog**: the static product list and its category grouping
//! - **Cart**: the cart state machine, the observable store and pricing
//! - **Checkout**: the (not yet available) checkout entry point
//!
//! # Example
//!
//! ```
//! use leafy_commerce::prelude::*;
//!
//! let catalog = Catalog::houseplants();
//! let mut store = CartStore::new();
//!
//! store.add("aloe");
//! store.increase("aloe");
//! store.add("snake");
//!
//! assert_eq!(store.total_count(), 3);
//! assert_eq!(store.total_cost(&catalog).amount_minor, 2 * 499 + 899);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CategoryGroup, Product};

    // Cart
    pub use crate::cart::{
        CartAction, CartPricing, CartState, CartStore, LinePricing, Quantity, SubscriptionId,
    };

    // Checkout
    pub use crate::checkout::{checkout, CHECKOUT_NOTICE};
}
