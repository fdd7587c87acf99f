//! Appwrap Options - Turns a partial packaging request into a complete one.
//!
//! A request names a target site and optionally overrides any packaging
//! setting. Resolution fills in the rest and guarantees a configuration the
//! packager can use as-is:
//!
//! ```text
//! RawOptions → defaults → normalize → inference → sanitize → ResolvedOptions
//!                                     (user agent → icon → title)
//! ```
//!
//! Only a failed user agent lookup (or a bad request) aborts resolution. A
//! missing icon or page title is logged and replaced with a fallback.
//!
//! # Example
//!
//! ```rust,ignore
//! use appwrap_core::AppConfig;
//! use appwrap_options::{logging, OptionsResolver, RawOptions};
//!
//! let config = AppConfig::load_with_env()?;
//! let resolver = OptionsResolver::standard(&config)?;
//!
//! let options = resolver
//!     .resolve(&RawOptions::new("calendar.google.com").with_platform("mac"))
//!     .await?;
//! logging::init_tracing(options.verbosity);
//!
//! println!("{}", options.to_json_pretty()?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod defaults;
pub mod error;
pub mod logging;
pub mod normalize;
#[allow(missing_docs)]
pub mod options;
pub mod orchestrator;
pub mod resolver;
pub mod sanitize;

// Re-export commonly used types
pub use defaults::{apply_defaults, ResolveEnv};
pub use error::{ResolveError, Result};
pub use normalize::normalize;
pub use options::{PartialOptions, RawOptions, ResolvedOptions, WebOptions, WindowOptions};
pub use orchestrator::{InferenceOrchestrator, InferenceStage};
pub use resolver::{resolve_options, OptionsResolver};
pub use sanitize::{kebab_case, sanitize_name};
