use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::QuizError;

/// Quiz difficulty chosen with the package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Company profile plus the selected quiz package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_description: String,
    #[serde(default)]
    pub company_website: String,
    #[serde(default)]
    pub number_of_questions: u32,
    #[serde(default)]
    pub difficulty_level: DifficultyLevel,
}

impl Company {
    /// Check the fields question generation depends on.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.company_name.trim().is_empty() {
            return Err(QuizError::InvalidCompany("Company name is required".into()));
        }
        if self.company_website.trim().is_empty() {
            return Err(QuizError::InvalidCompany(
                "Company website is required".into(),
            ));
        }
        if self.number_of_questions == 0 {
            return Err(QuizError::InvalidCompany(
                "Number of questions must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// A multiple-choice question as returned by the model, after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    /// Always exactly four options.
    pub options: Vec<String>,
    /// Index into `options`, in `0..4`.
    pub correct_answer: usize,
    pub explanation: String,
}
