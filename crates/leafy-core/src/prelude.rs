//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use leafy_core::prelude::*;
//! ```

// Leptos view macro and traits
pub use leptos::{prelude::*, view, IntoView};

// Leptos meta tags
pub use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};

// Router
pub use leafy_router::prelude::*;

// Core types
pub use crate::{CoreError, LeafyApp, StorefrontConfig};
