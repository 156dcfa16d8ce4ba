//! LeafyApp configuration and setup.

use leafy_router::RouteRegistry;

use crate::config::StorefrontConfig;

/// Storefront application builder.
///
/// Collects the configuration and the route table before the UI mounts.
///
/// # Example
///
/// ```rust,ignore
/// let (config, routes) = LeafyApp::from_toml(include_str!("../storefront.toml"))
///     .with_title("Leafy Lane")
///     .with_css("/pkg/storefront.css")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct LeafyApp {
    config: StorefrontConfig,
}

impl LeafyApp {
    /// Create an app from an existing configuration.
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }

    /// Create an app from a TOML document, using defaults if it is unusable.
    pub fn from_toml(content: &str) -> Self {
        Self::new(StorefrontConfig::from_toml_or_default(content))
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config = self.config.with_title(title);
        self
    }

    /// Set the stylesheet path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_css(path);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Build the configuration and the route table titled after the store.
    pub fn build(self) -> (StorefrontConfig, RouteRegistry) {
        let routes = RouteRegistry::storefront_for(&self.config.name);
        (self.config, routes)
    }
}

impl Default for LeafyApp {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafy_router::AppRoute;

    #[test]
    fn test_leafy_app_default() {
        let app = LeafyApp::default();
        assert_eq!(app.config().name, "Leafy Lane");
    }

    #[test]
    fn test_leafy_app_with_title() {
        let app = LeafyApp::default().with_title("Custom Title");
        assert_eq!(app.config().title, "Custom Title");
    }

    #[test]
    fn test_leafy_app_with_css() {
        let app = LeafyApp::default().with_css("/pkg/style.css");
        assert_eq!(app.config().css_path, Some("/pkg/style.css".to_string()));
    }

    #[test]
    fn test_leafy_app_from_bad_toml_falls_back() {
        let app = LeafyApp::from_toml("[[[");
        assert_eq!(app.config(), &StorefrontConfig::default());
    }

    #[test]
    fn test_leafy_app_build() {
        let (config, routes) = LeafyApp::from_toml("name = \"Fern Gully\"")
            .with_css("/assets/style.css")
            .build();

        assert_eq!(config.name, "Fern Gully");
        assert_eq!(routes.routes().len(), 3);
        assert_eq!(
            routes.get(AppRoute::Shop).unwrap().meta.title,
            "Shop | Fern Gully"
        );
    }
}
