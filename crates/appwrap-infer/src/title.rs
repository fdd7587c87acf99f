//! Page title inference.

use crate::error::{InferError, Result};
use appwrap_core::InferenceConfig;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;

/// Source of a human-readable name for the target site.
#[async_trait]
pub trait TitleSource: Send + Sync {
    /// Fetch the title of the page at `url`.
    ///
    /// The returned title is untrimmed; callers decide how to clean it up.
    ///
    /// # Errors
    /// Returns error if the page cannot be fetched or has no title.
    async fn title(&self, url: &str) -> Result<String>;
}

/// Fetches the target page over HTTP and reads its `<title>`.
#[derive(Debug, Clone)]
pub struct HttpTitleScraper {
    client: reqwest::Client,
}

impl HttpTitleScraper {
    /// Create a scraper using the inference timeout and user agent.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.title_timeout_secs))
            .user_agent(config.title_user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TitleSource for HttpTitleScraper {
    async fn title(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching {} to read its title", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        extract_title(&body).ok_or_else(|| InferError::TitleNotFound(url.to_string()))
    }
}

/// Text of the first `<title>` element in an HTML document.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}
