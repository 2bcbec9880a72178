//! PageFetcher trait for pluggable page retrieval.
//!
//! The extractor never talks to the network directly; it asks a
//! `PageFetcher` for the body of one URL. Production code uses
//! [`HttpFetcher`](crate::fetchers::HttpFetcher); tests use
//! [`MockFetcher`](crate::fetchers::MockFetcher).

use async_trait::async_trait;
use url::Url;

use crate::error::Result;

/// A successfully fetched (2xx) page body.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,

    /// Response body decoded as text
    pub body: String,
}

impl FetchedPage {
    pub fn new(final_url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            final_url: final_url.into(),
            body: body.into(),
        }
    }
}

/// Fetches one page per call.
///
/// Implementations must map a timeout to
/// [`ExtractionError::Timeout`](crate::ExtractionError::Timeout) and a
/// non-2xx answer to
/// [`ExtractionError::FetchFailed`](crate::ExtractionError::FetchFailed),
/// and must not retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a single URL.
    async fn fetch(&self, url: &Url) -> Result<FetchedPage>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
