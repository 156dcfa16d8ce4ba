//! Typed routes and their metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a path names no storefront page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route matches the path.
    #[error("Route not found: {0}")]
    NotFound(String),
}

/// One of the three storefront pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRoute {
    /// Landing page with the store introduction.
    Landing,
    /// Product listing grouped by category.
    Shop,
    /// Cart contents and totals.
    Cart,
}

impl AppRoute {
    /// Every route, in header navigation order.
    pub const ALL: [AppRoute; 3] = [AppRoute::Shop, AppRoute::Cart, AppRoute::Landing];

    /// URL path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Shop => "/shop",
            AppRoute::Cart => "/cart",
        }
    }

    /// Label used in the header navigation.
    pub fn nav_label(&self) -> &'static str {
        match self {
            AppRoute::Landing => "Home",
            AppRoute::Shop => "Shop",
            AppRoute::Cart => "Cart",
        }
    }

    /// Resolve a location to a route.
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        match path {
            "" => Some(AppRoute::Landing),
            "/shop" => Some(AppRoute::Shop),
            "/cart" => Some(AppRoute::Cart),
            _ => None,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for AppRoute {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppRoute::from_path(s).ok_or_else(|| RouteError::NotFound(s.to_string()))
    }
}

/// Display metadata for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Document title while the route is active.
    pub title: String,
    /// Whether the header links to this route.
    pub in_nav: bool,
}

/// A registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// The page.
    pub route: AppRoute,
    /// Its metadata.
    pub meta: RouteMeta,
}

impl RouteEntry {
    /// URL path of the entry.
    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

/// Ordered set of routes known to the app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRegistry {
    entries: Vec<RouteEntry>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three storefront routes, titled after `store_name`.
    pub fn storefront_for(store_name: &str) -> Self {
        let mut registry = Self::new();
        registry.register(AppRoute::Shop, format!("Shop | {}", store_name));
        registry.register(AppRoute::Cart, format!("Your Cart | {}", store_name));
        registry.register(AppRoute::Landing, store_name.to_string());
        registry
    }

    /// The three storefront routes with the default store name.
    pub fn storefront() -> Self {
        Self::storefront_for("Leafy Lane")
    }

    /// Register a route linked from the header, replacing any earlier entry
    /// for the same route.
    pub fn register(&mut self, route: AppRoute, title: impl Into<String>) -> &mut Self {
        self.insert(RouteEntry {
            route,
            meta: RouteMeta {
                title: title.into(),
                in_nav: true,
            },
        })
    }

    /// Register a route that resolves and sets its title but gets no header
    /// link.
    pub fn register_hidden(&mut self, route: AppRoute, title: impl Into<String>) -> &mut Self {
        self.insert(RouteEntry {
            route,
            meta: RouteMeta {
                title: title.into(),
                in_nav: false,
            },
        })
    }

    fn insert(&mut self, entry: RouteEntry) -> &mut Self {
        let route = entry.route;
        match self.entries.iter_mut().find(|e| e.route == route) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Routes shown in the header navigation.
    pub fn nav_entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter().filter(|e| e.meta.in_nav)
    }

    /// Look up the entry for a route.
    pub fn get(&self, route: AppRoute) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.route == route)
    }

    /// Resolve a location to a registered entry.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        AppRoute::from_path(path).and_then(|route| self.get(route))
    }
}
