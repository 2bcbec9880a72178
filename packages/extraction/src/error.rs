//! Typed errors for content extraction.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure kind and decide between retrying, abandoning the page, or
//! fixing their input.

use thiserror::Error;

/// Errors that can occur while extracting content from a page.
///
/// Every variant is terminal for a single call; nothing is retried
/// internally and no partial result is ever returned.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The URL did not parse as an absolute http(s) URL. Raised before
    /// any network access.
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// The fetch did not complete within the configured timeout.
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// The server answered with a non-2xx status.
    #[error("failed to fetch webpage: {status} {status_text}")]
    FetchFailed { status: u16, status_text: String },

    /// The page yielded too little text after normalization (typically a
    /// JavaScript-rendered shell).
    #[error("unable to extract meaningful content from the webpage ({length} chars)")]
    InsufficientContent { length: usize },

    /// Transport failure other than a timeout (DNS, connection reset,
    /// body read).
    #[error("HTTP error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ExtractionError {
    /// Whether the same request could plausibly succeed if tried again later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::FetchFailed { .. } | Self::Network(_)
        )
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
