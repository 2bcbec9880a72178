//! Quiz domain - company quiz questions and package pricing
//!
//! Flow: company website → content extraction → prompt → model → parsed questions

pub mod actions;
pub mod error;
pub mod models;
pub mod parse;
pub mod pricing;
pub mod prompt;

// Re-export commonly used types
pub use error::{QuestionParseError, QuizError};
pub use models::{Company, DifficultyLevel, GeneratedQuestion};
pub use parse::parse_questions;
pub use pricing::{price_range, quote, PriceQuote, PriceRange};
pub use prompt::build_question_prompt;
