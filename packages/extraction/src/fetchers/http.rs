//! HTTP-based fetcher implementation.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ExtractionError, Result};
use crate::traits::fetcher::{FetchedPage, PageFetcher};
use crate::types::config::{ExtractorConfig, DEFAULT_USER_AGENT};

/// HTTP fetcher that issues a single GET per call.
///
/// A fresh `reqwest::Client` is built for every fetch and dropped with it:
/// no connection pool, cookies or session state outlive the call.
///
/// # Example
///
/// ```rust,ignore
/// use content_extraction::fetchers::HttpFetcher;
///
/// let fetcher = HttpFetcher::new().with_timeout(Duration::from_secs(10));
/// let page = fetcher.fetch(&Url::parse("https://example.com")?).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
    timeout: Duration,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default settings.
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create a fetcher honoring the extractor's user agent and timeout.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn classify(url: &Url, error: reqwest::Error) -> ExtractionError {
        if error.is_timeout() {
            ExtractionError::Timeout {
                url: url.to_string(),
            }
        } else {
            ExtractionError::Network(Box::new(error))
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        debug!(url = %url, timeout_ms = self.timeout.as_millis() as u64, "HTTP fetch starting");

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ExtractionError::Network(Box::new(e)))?;

        let response = client
            .get(url.clone())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                Self::classify(url, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "HTTP error status");
            return Err(ExtractionError::FetchFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // Capture final URL after redirects
        let final_url = response.url().to_string();

        let body = response.text().await.map_err(|e| Self::classify(url, e))?;

        debug!(
            url = %url,
            final_url = %final_url,
            body_len = body.len(),
            "Page fetched successfully"
        );

        Ok(FetchedPage::new(final_url, body))
    }

    fn name(&self) -> &str {
        "http"
    }
}
