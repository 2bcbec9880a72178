//! Fetcher implementations.
//!
//! # Available Fetchers
//!
//! - `HttpFetcher` - Single GET over HTTP with timeout and User-Agent
//! - `MockFetcher` - For testing

mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::{MockFetcher, MockResponse};

// Re-export from traits for convenience
pub use crate::traits::fetcher::{FetchedPage, PageFetcher};
