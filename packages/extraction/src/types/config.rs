//! Configuration for fetching and bounding extracted content.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Browser-like User-Agent sent with every fetch.
///
/// Many company sites serve a stripped page or a 403 to obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for a [`ContentExtractor`](crate::ContentExtractor).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// User-Agent header value.
    pub user_agent: String,

    /// Hard limit on the whole fetch (connect, headers and body).
    ///
    /// Default: 30 seconds.
    #[serde(with = "duration_secs")]
    pub timeout: Duration,

    /// Content longer than this many characters is cut and suffixed
    /// with `"..."`.
    ///
    /// Default: 8000.
    pub max_content_chars: usize,

    /// Content shorter than this many characters is rejected as
    /// insufficient.
    ///
    /// Default: 100.
    pub min_content_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_content_chars: 8000,
            min_content_chars: 100,
        }
    }
}

impl ExtractorConfig {
    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the truncation threshold.
    pub fn with_max_content_chars(mut self, max: usize) -> Self {
        self.max_content_chars = max;
        self
    }

    /// Set the minimum accepted content length.
    pub fn with_min_content_chars(mut self, min: usize) -> Self {
        self.min_content_chars = min;
        self
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
