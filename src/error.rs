//! Error types.

use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Error returned when a search cannot be started.
///
/// Once a search is running it always terminates with a result; the
/// algorithmic stopping conditions are reported through
/// [`Termination`](crate::Termination), not as errors.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
