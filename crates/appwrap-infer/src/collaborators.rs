//! Bundle of inference collaborators handed to the options resolver.

use crate::error::Result;
use crate::host::{HostInspector, LocalHost};
use crate::icon::{IconSource, NoIconSource};
use crate::title::{HttpTitleScraper, TitleSource};
use crate::user_agent::{ChromeVersionTable, UserAgentSource};
use appwrap_core::InferenceConfig;
use std::sync::Arc;

/// The external sources options resolution may consult.
///
/// Each collaborator is a trait object so tests and embedders can substitute
/// their own implementations.
#[derive(Clone)]
pub struct Collaborators {
    /// Host platform/architecture detection
    pub host: Arc<dyn HostInspector>,
    /// User agent lookup
    pub user_agent: Arc<dyn UserAgentSource>,
    /// Icon fetcher
    pub icon: Arc<dyn IconSource>,
    /// Page title scraper
    pub title: Arc<dyn TitleSource>,
}

impl Collaborators {
    /// Create a bundle from explicit collaborators.
    #[must_use]
    pub fn new(
        host: Arc<dyn HostInspector>,
        user_agent: Arc<dyn UserAgentSource>,
        icon: Arc<dyn IconSource>,
        title: Arc<dyn TitleSource>,
    ) -> Self {
        Self {
            host,
            user_agent,
            icon,
            title,
        }
    }

    /// The bundled implementations: local host detection, the Electron/Chrome
    /// table, no icon fetcher and the HTTP title scraper.
    ///
    /// # Errors
    /// Returns error if the HTTP client for title scraping cannot be built.
    pub fn standard(config: &InferenceConfig) -> Result<Self> {
        Ok(Self::new(
            Arc::new(LocalHost),
            Arc::new(ChromeVersionTable::new()),
            Arc::new(NoIconSource),
            Arc::new(HttpTitleScraper::new(config)?),
        ))
    }

    /// Replace the icon source.
    #[must_use]
    pub fn with_icon_source(mut self, icon: Arc<dyn IconSource>) -> Self {
        self.icon = icon;
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
