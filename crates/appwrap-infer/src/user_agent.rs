//! User agent inference from the Electron version.
//!
//! Sites render best for a mainstream desktop Chrome, so the packaged app
//! presents the user agent of the Chrome build bundled with its Electron
//! release instead of Electron's own.

use crate::error::{InferError, Result};
use appwrap_core::Platform;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Source of a browser user agent string for a packaged app.
#[async_trait]
pub trait UserAgentSource: Send + Sync {
    /// Produce the user agent for an Electron version on a platform.
    ///
    /// # Errors
    /// Returns error if no user agent can be produced; resolution treats
    /// this as fatal.
    async fn user_agent(&self, electron_version: &str, platform: &Platform) -> Result<String>;
}

/// Chrome versions bundled with each Electron `major.minor` line.
const BUNDLED_CHROME: &[(&str, &str)] = &[
    ("0.37", "49.0.2623.75"),
    ("1.0", "49.0.2623.75"),
    ("1.1", "50.0.2661.102"),
    ("1.2", "51.0.2704.106"),
    ("1.3", "52.0.2743.82"),
    ("1.4", "53.0.2785.143"),
    ("1.5", "54.0.2840.101"),
    ("1.6", "56.0.2924.87"),
    ("1.7", "58.0.3029.110"),
    ("1.8", "59.0.3071.115"),
    ("2.0", "61.0.3163.100"),
    ("3.0", "66.0.3359.181"),
    ("4.0", "69.0.3497.106"),
    ("5.0", "73.0.3683.121"),
];

/// Maps Electron releases to their bundled Chrome version and formats a
/// desktop Chrome user agent for the target platform.
#[derive(Debug, Clone)]
pub struct ChromeVersionTable {
    chrome_by_line: BTreeMap<String, String>,
}

impl Default for ChromeVersionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeVersionTable {
    /// Create a table with the bundled Electron/Chrome pairs.
    #[must_use]
    pub fn new() -> Self {
        let chrome_by_line = BUNDLED_CHROME
            .iter()
            .map(|(electron, chrome)| ((*electron).to_string(), (*chrome).to_string()))
            .collect();
        Self { chrome_by_line }
    }

    /// Add or replace the Chrome version for an Electron `major.minor` line.
    #[must_use]
    pub fn with_entry(
        mut self,
        electron_line: impl Into<String>,
        chrome: impl Into<String>,
    ) -> Self {
        self.chrome_by_line.insert(electron_line.into(), chrome.into());
        self
    }

    /// Look up the Chrome version bundled with an Electron version.
    ///
    /// Accepts `1.1.3`, `v1.1.3` or `1.1`; only `major.minor` is significant.
    pub fn chrome_version(&self, electron_version: &str) -> Result<&str> {
        let version = electron_version.trim().trim_start_matches('v');
        let mut parts = version.split('.');
        let line = match (parts.next(), parts.next()) {
            (Some(major), Some(minor)) if !major.is_empty() && !minor.is_empty() => {
                format!("{major}.{minor}")
            }
            _ => return Err(InferError::UnknownElectronVersion(electron_version.to_string())),
        };

        self.chrome_by_line
            .get(&line)
            .map(String::as_str)
            .ok_or_else(|| InferError::UnknownElectronVersion(electron_version.to_string()))
    }
}

/// Format the desktop Chrome user agent for a platform.
pub fn format_user_agent(chrome_version: &str, platform: &Platform) -> Result<String> {
    let system = match platform {
        Platform::Darwin | Platform::Mas => "Macintosh; Intel Mac OS X 10_11_5",
        Platform::Win32 => "Windows NT 10.0; WOW64",
        Platform::Linux => "X11; Linux x86_64",
        Platform::Other(other) => return Err(InferError::UnsupportedPlatform(other.clone())),
    };
    Ok(format!(
        "Mozilla/5.0 ({system}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{chrome_version} Safari/537.36"
    ))
}

#[async_trait]
impl UserAgentSource for ChromeVersionTable {
    async fn user_agent(&self, electron_version: &str, platform: &Platform) -> Result<String> {
        let chrome = self.chrome_version(electron_version)?;
        tracing::debug!("Electron {} bundles Chrome {}", electron_version, chrome);
        format_user_agent(chrome, platform)
    }
}
