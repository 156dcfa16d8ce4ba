//! Route table for the Leafy Lane storefront.
//!
//! The storefront has exactly three pages:
//!
//! ```text
//! /       -> Landing
//! /shop   -> Shop (product listing)
//! /cart   -> Cart
//! ```
//!
//! There are no parameters, guards or lazy loading. [`AppRoute`] is the typed
//! name of a page; [`RouteRegistry`] carries the display metadata the header
//! navigation needs.
//!
//! # Usage
//!
//! ```
//! use leafy_router::{AppRoute, RouteRegistry};
//!
//! assert_eq!(AppRoute::Shop.path(), "/shop");
//! assert_eq!(AppRoute::from_path("/cart?ref=badge"), Some(AppRoute::Cart));
//!
//! let registry = RouteRegistry::storefront();
//! assert_eq!(registry.resolve("/").map(|e| e.route), Some(AppRoute::Landing));
//! ```

pub mod prelude;
mod route;

pub use route::*;

// Re-export leptos_router essentials
pub use leptos_router::{
    components::{Route, Router, Routes, A},
    hooks::use_navigate,
    path, NavigateOptions,
};
