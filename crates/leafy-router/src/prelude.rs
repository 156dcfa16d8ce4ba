//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use leafy_router::prelude::*;
//! ```

pub use crate::{
    path, use_navigate, AppRoute, NavigateOptions, Route, RouteEntry, RouteError, RouteMeta,
    RouteRegistry, Router, Routes, A,
};
