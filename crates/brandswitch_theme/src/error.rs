//! Error types for theme persistence and configuration

use thiserror::Error;

/// Failures reported by a [`KeyValueStore`](crate::store::KeyValueStore) backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Storage is disabled or not present (private browsing, policy, no window)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write because it is full
    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other backend failure
    #[error("storage error: {0}")]
    Backend(String),
}

/// Failures while loading a [`ThemeConfig`](crate::config::ThemeConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    /// The TOML document could not be produced
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// The configuration parsed but is not usable
    #[error("invalid theme config: {0}")]
    Invalid(String),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
