//! Appwrap Core - Foundation crate for the appwrap packaging toolchain.
//!
//! This crate provides the shared types, error handling and configuration
//! management that the inference and options-resolution crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`filename`] - File name rules for packaged app names
//! - [`types`] - Shared identifier enums (`Platform`, `Arch`, `Verbosity`)
//!
//! # Example
//!
//! ```rust
//! use appwrap_core::{AppConfig, Platform};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.defaults.width, 1280);
//!
//! assert_eq!(Platform::from_alias("OSX"), Platform::Darwin);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod filename;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, DefaultsConfig, InferenceConfig, DEFAULT_APP_NAME};
pub use error::{AppwrapError, ConfigError, ConfigResult, Result};
pub use filename::{filesystem_safe, is_safe_app_name};
pub use types::{Arch, Platform, Verbosity};
