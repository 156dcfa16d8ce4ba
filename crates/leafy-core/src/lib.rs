//! App configuration and Leptos re-exports for the Leafy Lane storefront.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use leafy_core::prelude::*;
//!
//! let (config, routes) = LeafyApp::from_toml(include_str!("../storefront.toml"))
//!     .with_css("/pkg/storefront.css")
//!     .build();
//! ```

pub mod prelude;
mod app;
mod config;
mod error;

pub use app::*;
pub use config::*;
pub use error::*;

// Re-export Leptos essentials
pub use leptos::{component, prelude::*, view, IntoView};
pub use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};

// Re-export leafy-router
pub use leafy_router::{AppRoute, RouteEntry, RouteMeta, RouteRegistry};
