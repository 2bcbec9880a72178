//! Extraction output.

use serde::{Deserialize, Serialize};

/// Bounded, prompt-ready text extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Normalized and possibly truncated page text.
    pub content: String,

    /// Trimmed text of the page's `<title>`, possibly empty.
    pub title: String,

    /// The URL exactly as requested.
    pub source_url: String,

    /// Number of single-space separated tokens in `content`.
    pub word_count: usize,
}

impl ExtractionResult {
    /// Build a result, deriving `word_count` from `content`.
    pub fn new(content: String, title: String, source_url: impl Into<String>) -> Self {
        let word_count = crate::pipeline::word_count(&content);
        Self {
            content,
            title,
            source_url: source_url.into(),
            word_count,
        }
    }

    /// Whether the content was cut at the length limit.
    pub fn is_truncated(&self) -> bool {
        self.content.ends_with(crate::pipeline::TRUNCATION_MARKER)
    }
}
