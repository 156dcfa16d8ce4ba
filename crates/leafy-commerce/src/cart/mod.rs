//! Shopping cart module.
//!
//! Contains the cart state machine, the observable store and pricing.

mod pricing;
mod state;
mod store;

pub use pricing::{CartPricing, LinePricing};
pub use state::{CartAction, CartState, Quantity};
pub use store::{CartStore, SubscriptionId};
