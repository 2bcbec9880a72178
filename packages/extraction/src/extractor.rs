//! The ContentExtractor: fetch one page and reduce it to bounded text.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::fetchers::HttpFetcher;
use crate::pipeline::extract_from_html;
use crate::traits::fetcher::PageFetcher;
use crate::types::{
    config::ExtractorConfig, request::ExtractionRequest, result::ExtractionResult,
};

/// Fetches a page and extracts its salient text.
///
/// Holds no per-call state, so one extractor can serve any number of
/// concurrent [`extract`](Self::extract) calls.
///
/// # Example
///
/// ```rust,ignore
/// use content_extraction::{ContentExtractor, ExtractionRequest};
///
/// let extractor = ContentExtractor::new();
/// let result = extractor
///     .extract(ExtractionRequest::new("https://example.com"))
///     .await?;
/// println!("{} words from {}", result.word_count, result.title);
/// ```
#[derive(Clone)]
pub struct ContentExtractor {
    fetcher: Arc<dyn PageFetcher>,
    config: ExtractorConfig,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor {
    /// Create an extractor with default settings, fetching over HTTP.
    pub fn new() -> Self {
        Self::from_config(ExtractorConfig::default())
    }

    /// Create an extractor with a custom config, fetching over HTTP.
    pub fn from_config(config: ExtractorConfig) -> Self {
        Self {
            fetcher: Arc::new(HttpFetcher::from_config(&config)),
            config,
        }
    }

    /// Replace the fetcher (e.g. with a `MockFetcher` in tests).
    pub fn with_fetcher(mut self, fetcher: impl PageFetcher + 'static) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }

    /// Fetch the requested page and extract its content.
    ///
    /// The URL is validated before any network access. Exactly one fetch
    /// is attempted; failures are returned, never retried.
    pub async fn extract(&self, request: ExtractionRequest) -> Result<ExtractionResult> {
        let url = request.parse_url()?;

        info!(url = %url, fetcher = self.fetcher.name(), "Extracting page content");

        let outcome = match self.fetcher.fetch(&url).await {
            Ok(page) => {
                if page.final_url != url.as_str() {
                    debug!(url = %url, final_url = %page.final_url, "Followed redirect");
                }
                extract_from_html(&page.body, &request.url, &self.config)
            }
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(result) => info!(
                url = %url,
                words = result.word_count,
                truncated = result.is_truncated(),
                "Extraction completed"
            ),
            Err(e) => warn!(
                url = %url,
                error = %e,
                retryable = e.is_retryable(),
                "Extraction failed"
            ),
        }

        outcome
    }

    /// Run independent extractions with at most `concurrency` in flight.
    ///
    /// Results come back in the same order as `requests`. A `concurrency`
    /// of zero is treated as one.
    pub async fn extract_all(
        &self,
        requests: Vec<ExtractionRequest>,
        concurrency: usize,
    ) -> Vec<Result<ExtractionResult>> {
        stream::iter(requests)
            .map(|request| self.extract(request))
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::fetchers::MockFetcher;
    use std::time::Duration;

    fn page(body: &str) -> String {
        format!(
            "<html><head><title>Acme</title></head><body><main><p>{}</p></main></body></html>",
            body.repeat(4)
        )
    }

    #[tokio::test]
    async fn test_invalid_url_skips_fetch() {
        let mock = MockFetcher::new();
        let extractor = ContentExtractor::new().with_fetcher(mock.clone());

        for bad in ["not a url", "example.com", "", "ftp://example.com"] {
            let err = extractor.extract(ExtractionRequest::new(bad)).await.unwrap_err();
            assert!(matches!(err, ExtractionError::InvalidUrl { .. }), "{bad}");
        }

        assert_eq!(mock.fetch_call_count(), 0);
    }

    #[tokio::test]
    async fn test_404_is_fetch_failed() {
        let mock = MockFetcher::new().with_status("https://acme.test/gone", 404, "Not Found");
        let extractor = ContentExtractor::new().with_fetcher(mock.clone());

        let err = extractor
            .extract(ExtractionRequest::new("https://acme.test/gone"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::FetchFailed { status: 404, ref status_text } if status_text == "Not Found"
        ));
        assert_eq!(mock.fetch_call_count(), 1);
    }

    #[tokio::test]
    async fn test_timeout_passes_through() {
        let mock = MockFetcher::new().with_timeout("https://slow.test");
        let extractor = ContentExtractor::new().with_fetcher(mock);

        let err = extractor
            .extract(ExtractionRequest::new("https://slow.test"))
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractionError::Timeout { .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_source_url_is_as_requested() {
        let mock = MockFetcher::new().with_html(
            "https://acme.test",
            page("Acme makes rockets for small satellites. "),
        );
        let extractor = ContentExtractor::new().with_fetcher(mock);

        let result = extractor
            .extract(ExtractionRequest::new("https://acme.test"))
            .await
            .unwrap();

        assert_eq!(result.source_url, "https://acme.test");
        assert_eq!(result.title, "Acme");
        assert!(result.content.starts_with("Acme Acme makes rockets"));
    }

    #[tokio::test]
    async fn test_extract_all_preserves_order_and_limit() {
        let mut mock = MockFetcher::new().with_delay(Duration::from_millis(20));
        for i in 0..6 {
            mock = mock.with_html(
                &format!("https://site{i}.test"),
                page(&format!("Company number {i} sells widgets and gadgets. ")),
            );
        }
        let extractor = ContentExtractor::new().with_fetcher(mock.clone());

        let mut requests: Vec<ExtractionRequest> = (0..6)
            .map(|i| ExtractionRequest::new(format!("https://site{i}.test")))
            .collect();
        requests.push(ExtractionRequest::new("bogus"));

        let results = extractor.extract_all(requests, 2).await;

        assert_eq!(results.len(), 7);
        for (i, result) in results.iter().take(6).enumerate() {
            let result = result.as_ref().unwrap();
            assert_eq!(result.source_url, format!("https://site{i}.test"));
        }
        assert!(matches!(results[6], Err(ExtractionError::InvalidUrl { .. })));
        assert!(mock.max_in_flight() <= 2);
        assert_eq!(mock.fetch_call_count(), 6);
    }
}
