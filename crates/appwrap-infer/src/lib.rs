//! Appwrap Infer - External collaborators for options resolution.
//!
//! Everything here touches the outside world (the network, the host
//! machine) or stands in for something that would. Options resolution only
//! sees the traits, so each collaborator can be swapped out in tests.
//!
//! # Collaborators
//!
//! - [`normalize_url`] - Adds a missing scheme and validates the target URL
//! - [`HostInspector`] - Host platform and architecture ([`LocalHost`])
//! - [`UserAgentSource`] - Chrome user agent per Electron release ([`ChromeVersionTable`])
//! - [`IconSource`] - App icon lookup ([`NoIconSource`] when none is configured)
//! - [`TitleSource`] - Page title scraping ([`HttpTitleScraper`])
//!
//! # Example
//!
//! ```rust
//! use appwrap_core::Platform;
//! use appwrap_infer::{normalize_url, ChromeVersionTable, UserAgentSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = normalize_url("example.com")?;
//! assert_eq!(url, "http://example.com");
//!
//! let ua = ChromeVersionTable::new()
//!     .user_agent("1.1.3", &Platform::Linux)
//!     .await?;
//! assert!(ua.contains("Chrome/"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod collaborators;
pub mod error;
pub mod host;
pub mod icon;
pub mod normalize;
pub mod title;
pub mod user_agent;

// Re-export commonly used types
pub use collaborators::Collaborators;
pub use error::{InferError, Result};
pub use host::{HostInspector, LocalHost};
pub use icon::{IconSource, NoIconSource};
pub use normalize::normalize_url;
pub use title::{extract_title, HttpTitleScraper, TitleSource};
pub use user_agent::{format_user_agent, ChromeVersionTable, UserAgentSource};
