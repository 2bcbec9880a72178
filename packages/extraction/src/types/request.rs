//! Extraction input.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ExtractionError, Result};

/// A request to extract content from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Absolute URL of the page to fetch.
    pub url: String,
}

impl ExtractionRequest {
    /// Create a request for a URL. The URL is validated by
    /// [`parse_url`](Self::parse_url), not here.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Parse the request URL.
    ///
    /// Fails with [`ExtractionError::InvalidUrl`] when the string is not an
    /// absolute URL or its scheme is not http/https.
    pub fn parse_url(&self) -> Result<Url> {
        let invalid = || ExtractionError::InvalidUrl {
            url: self.url.clone(),
        };

        let url = Url::parse(self.url.trim()).map_err(|_| invalid())?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            _ => Err(invalid()),
        }
    }
}

impl From<&str> for ExtractionRequest {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ExtractionRequest {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}
