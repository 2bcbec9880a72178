//! Web Page Content Extraction Library
//!
//! Fetches a single web page and reduces it to bounded, whitespace-normalized
//! text suitable for embedding verbatim into a language-model prompt.
//!
//! # Usage
//!
//! ```rust,ignore
//! use content_extraction::{ContentExtractor, ExtractionRequest, ExtractionError};
//!
//! let extractor = ContentExtractor::new();
//! match extractor.extract(ExtractionRequest::new("https://acme.example")).await {
//!     Ok(result) => println!("{} words", result.word_count),
//!     Err(e) if e.is_retryable() => { /* try again later */ }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! # Modules
//!
//! - [`extractor`] - The `ContentExtractor` entry point
//! - [`pipeline`] - Network-free HTML → text stages
//! - [`traits`] - The `PageFetcher` abstraction
//! - [`fetchers`] - HTTP and mock fetchers
//! - [`types`] - Request, result and config types

pub mod error;
pub mod extractor;
pub mod fetchers;
pub mod pipeline;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractionError, Result};
pub use extractor::ContentExtractor;
pub use fetchers::{FetchedPage, HttpFetcher, MockFetcher, MockResponse, PageFetcher};
pub use pipeline::{extract_from_html, SalientFields};
pub use types::{
    config::{ExtractorConfig, DEFAULT_USER_AGENT},
    request::ExtractionRequest,
    result::ExtractionResult,
};
