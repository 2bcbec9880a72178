//! Question generation endpoints.
//!
//! POST /api/gemini               `{ "prompt": "...", "companyData": {...} }`
//! POST /api/questions/generate   `{ "company": {...} }`

use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::domains::quiz::actions::{generate_for_company, generate_questions};
use crate::domains::quiz::{Company, GeneratedQuestion};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    /// Accepted for compatibility; not used in generation.
    #[serde(default)]
    pub company_data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct GeminiResponse {
    pub questions: Vec<GeneratedQuestion>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub company: Company,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsResponse {
    pub company_id: String,
    pub questions: Vec<GeneratedQuestion>,
    pub message: String,
    pub generated_at: DateTime<Utc>,
}

fn success_message(count: usize) -> String {
    format!("Successfully generated {} questions", count)
}

/// Generate questions from a caller-supplied prompt.
pub async fn gemini_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<GeminiRequest>, JsonRejection>,
) -> Result<Json<GeminiResponse>, ApiError> {
    let Json(body) = payload?;
    let prompt = body
        .prompt
        .filter(|prompt| !prompt.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Prompt is required".to_string()))?;

    let questions = generate_questions(&prompt, &state.deps).await?;

    Ok(Json(GeminiResponse {
        message: success_message(questions.len()),
        questions,
    }))
}

/// Extract a company's website and generate its questions in one call.
pub async fn generate_questions_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<Json<GenerateQuestionsResponse>, ApiError> {
    let Json(body) = payload?;
    let company = body.company;
    let questions = generate_for_company(&company, &state.deps).await?;

    info!(company_id = %company.id, count = questions.len(), "Questions ready");

    Ok(Json(GenerateQuestionsResponse {
        company_id: company.id,
        message: success_message(questions.len()),
        questions,
        generated_at: Utc::now(),
    }))
}
