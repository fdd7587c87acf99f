//! Application icon inference.

use crate::error::{InferError, Result};
use appwrap_core::Platform;
use async_trait::async_trait;
use std::path::PathBuf;

/// Source of a local icon file for the packaged app.
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Locate or produce an icon for `url` in a format suitable for `platform`.
    ///
    /// # Errors
    /// Returns error if no icon can be produced; resolution continues without
    /// an icon in that case.
    async fn icon(&self, url: &str, platform: &Platform) -> Result<PathBuf>;
}

/// Icon source used when no icon fetcher is configured. Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIconSource;

#[async_trait]
impl IconSource for NoIconSource {
    async fn icon(&self, url: &str, _platform: &Platform) -> Result<PathBuf> {
        Err(InferError::Unavailable(format!("no icon source configured for {url}")))
    }
}
