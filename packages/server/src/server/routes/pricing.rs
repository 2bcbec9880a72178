//! Package price quote endpoint.
//!
//! POST /api/pricing/quote  `{ "numberOfQuestions": 20, "difficultyLevel": "hard" }`

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;

use crate::domains::quiz::{quote, DifficultyLevel, PriceQuote};
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteRequest {
    pub number_of_questions: u32,
    pub difficulty_level: DifficultyLevel,
}

pub async fn pricing_quote_handler(
    payload: Result<Json<PriceQuoteRequest>, JsonRejection>,
) -> Result<Json<PriceQuote>, ApiError> {
    let Json(body) = payload?;

    let mut rng = rand::thread_rng();
    Ok(Json(quote(
        body.number_of_questions,
        body.difficulty_level,
        &mut rng,
    )))
}
