//! Storefront configuration.
//!
//! The configuration is a small TOML document embedded into the binary at
//! build time. Every field has a default, so an empty document is valid.

use anyhow::{Context, Result};
use leafy_observability::LogConfig;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Store name shown in the header, landing page and footer.
    pub name: String,
    /// Default document title.
    pub title: String,
    /// Landing page introduction.
    pub tagline: String,
    /// Landing page background image URL.
    pub hero_image: String,
    /// Stylesheet path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_path: Option<String>,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Leafy Lane".to_string(),
            title: "Leafy Lane | Houseplants".to_string(),
            tagline: default_tagline(),
            hero_image: "https://images.unsplash.com/photo-1470058869958-2a77ade41c02?q=80&w=1600&auto=format&fit=crop".to_string(),
            css_path: None,
            log: LogConfig::default(),
        }
    }
}

fn default_tagline() -> String {
    "We\u{2019}re a boutique houseplant studio bringing lush, air-purifying greens to urban \
     homes. From low-light heroes to tropical showstoppers, we source responsibly and ship \
     with care."
        .to_string()
}

impl StorefrontConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(CoreError::from)
            .context("Failed to parse storefront config")?;
        config.validate().context("Invalid storefront config")?;
        Ok(config)
    }

    /// Parse a TOML document, falling back to defaults on any error.
    pub fn from_toml_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "using default storefront config");
                Self::default()
            }
        }
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                field: "name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                field: "title".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the stylesheet path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafy_observability::{LogFormat, LogLevel};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = StorefrontConfig::default();

        assert_eq!(config.name, "Leafy Lane");
        assert!(config.css_path.is_none());
        assert_eq!(config.log.level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            name = "Fern Gully"
            css_path = "/pkg/storefront.css"

            [log]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "Fern Gully");
        assert_eq!(config.title, StorefrontConfig::default().title);
        assert_eq!(config.css_path.as_deref(), Some("/pkg/storefront.css"));
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_malformed_document_rejected() {
        let err = StorefrontConfig::from_toml_str("name = ").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse storefront config"));
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(StorefrontConfig::from_toml_str("[log]\nlevel = \"loud\"").is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = StorefrontConfig::from_toml_str("name = \"  \"").unwrap_err();
        let core = err.downcast_ref::<CoreError>().unwrap();
        assert!(matches!(core, CoreError::InvalidConfig { field, .. } if field == "name"));
    }

    #[test]
    fn test_fallback_to_default() {
        let config = StorefrontConfig::from_toml_or_default("name = 42");
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_log_aliases_accepted() {
        let config = StorefrontConfig::from_toml_str("[log]\nlevel = \"WARNING\"\nformat = \"text\"").unwrap();
        assert_eq!(config.log.level, LogLevel::Warn);
        assert_eq!(config.log.format, LogFormat::Human);
    }
}
