//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the PageFetcher trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use url::Url;

use crate::error::{ExtractionError, Result};
use crate::traits::fetcher::{FetchedPage, PageFetcher};

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 with this HTML body
    Html(String),
    /// Non-2xx status with reason phrase
    Status(u16, String),
    /// Behave as if the timeout elapsed
    Timeout,
}

/// Mock fetcher for testing.
///
/// URLs without a canned response answer `404 Not Found`.
///
/// # Example
///
/// ```rust
/// use content_extraction::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new().with_html("https://example.com", "<p>Hello</p>");
/// assert_eq!(mock.fetch_call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    /// Canned responses indexed by normalized URL
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    /// Track calls for verification
    fetch_calls: Arc<RwLock<Vec<String>>>,
    /// Simulated latency per fetch
    delay: Option<Duration>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(url: &str) -> String {
        Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_string())
    }

    /// Register a response for a URL.
    pub fn add_response(&self, url: &str, response: MockResponse) {
        self.responses
            .write()
            .unwrap()
            .insert(Self::key(url), response);
    }

    /// Serve this HTML for a URL (builder pattern).
    pub fn with_html(self, url: &str, html: impl Into<String>) -> Self {
        self.add_response(url, MockResponse::Html(html.into()));
        self
    }

    /// Answer a URL with a non-2xx status (builder pattern).
    pub fn with_status(self, url: &str, status: u16, status_text: impl Into<String>) -> Self {
        self.add_response(url, MockResponse::Status(status, status_text.into()));
        self
    }

    /// Time out on a URL (builder pattern).
    pub fn with_timeout(self, url: &str) -> Self {
        self.add_response(url, MockResponse::Timeout);
        self
    }

    /// Sleep this long inside every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were fetched, in call order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// Highest number of fetches observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let response = self.responses.read().unwrap().get(url.as_str()).cloned();
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match response {
            Some(MockResponse::Html(html)) => Ok(FetchedPage::new(url.as_str(), html)),
            Some(MockResponse::Status(status, status_text)) => {
                Err(ExtractionError::FetchFailed {
                    status,
                    status_text,
                })
            }
            Some(MockResponse::Timeout) => Err(ExtractionError::Timeout {
                url: url.to_string(),
            }),
            None => Err(ExtractionError::FetchFailed {
                status: 404,
                status_text: "Not Found".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_canned_html() {
        let mock = MockFetcher::new().with_html("https://example.com", "<p>Hi</p>");

        let page = mock
            .fetch(&Url::parse("https://example.com/").unwrap())
            .await
            .unwrap();

        assert_eq!(page.body, "<p>Hi</p>");
        assert_eq!(page.final_url, "https://example.com/");
        assert_eq!(mock.fetch_calls(), vec!["https://example.com/".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_url_is_404() {
        let mock = MockFetcher::new();
        let err = mock
            .fetch(&Url::parse("https://missing.test").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractionError::FetchFailed { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mock = MockFetcher::new();
        let clone = mock.clone().with_timeout("https://slow.test");

        let err = mock
            .fetch(&Url::parse("https://slow.test").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractionError::Timeout { .. }));
        assert_eq!(clone.fetch_call_count(), 1);
    }
}
