//! Core error types for appwrap.
//!
//! `AppwrapError` is the umbrella type binaries use when they need a single
//! error across crates. Each crate keeps its own narrower error enum.

use thiserror::Error;

/// Central error type for appwrap operations.
#[derive(Error, Debug)]
pub enum AppwrapError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Inference collaborator errors (user agent, icon, title, host)
    #[error("inference error: {0}")]
    Inference(String),

    /// Options resolution errors
    #[error("options error: {0}")]
    Options(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `AppwrapError`.
pub type Result<T> = std::result::Result<T, AppwrapError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
