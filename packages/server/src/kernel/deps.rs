//! Server dependencies for route handlers (using traits for testability)
//!
//! All external services sit behind trait abstractions or swappable
//! backends so tests never touch the network.

use content_extraction::ContentExtractor;
use std::sync::Arc;

use crate::kernel::BaseAI;

/// Server dependencies accessible to handlers and domain actions
#[derive(Clone)]
pub struct ServerDeps {
    /// Website content extraction
    pub extractor: ContentExtractor,
    /// Question generation model
    pub ai: Arc<dyn BaseAI>,
}

impl ServerDeps {
    pub fn new(extractor: ContentExtractor, ai: Arc<dyn BaseAI>) -> Self {
        Self { extractor, ai }
    }
}
