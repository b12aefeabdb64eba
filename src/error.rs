//! Error types for snakk.

use thiserror::Error;

/// Library-level error type for snakk operations.
#[derive(Error, Debug)]
pub enum SnakkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for snakk operations.
pub type Result<T> = std::result::Result<T, SnakkError>;
