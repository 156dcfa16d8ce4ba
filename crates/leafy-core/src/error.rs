//! Error types for the app core.

use thiserror::Error;

/// Errors that can occur while configuring the storefront.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A configuration value is present but unusable.
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}
