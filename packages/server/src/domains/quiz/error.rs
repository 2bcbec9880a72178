use content_extraction::ExtractionError;
use thiserror::Error;

/// Why a model response could not be turned into questions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionParseError {
    /// Neither the cleaned text nor any `[...]` span in it is JSON
    #[error("AI response is not in valid JSON format")]
    NotJson,

    /// A `[...]` span was found but did not parse
    #[error("Failed to parse AI response as JSON")]
    Unparseable,

    #[error("AI response is not an array of questions")]
    NotAnArray,

    #[error("No valid questions generated")]
    NoValidQuestions,
}

/// Errors from the quiz domain.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("{0}")]
    InvalidCompany(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("AI service error: {0}")]
    AI(String),

    #[error(transparent)]
    Parse(#[from] QuestionParseError),
}
