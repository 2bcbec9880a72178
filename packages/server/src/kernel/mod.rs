//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use ai::GeminiAI;
pub use deps::ServerDeps;
pub use traits::BaseAI;

// Re-export from extraction library for easy access
pub use content_extraction::{
    ContentExtractor, ExtractionError, ExtractionRequest, ExtractionResult, ExtractorConfig,
};
