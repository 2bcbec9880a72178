//! Website content extraction endpoint.
//!
//! POST /api/scrape  `{ "url": "https://..." }`

use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::kernel::ExtractionRequest;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResponse {
    pub content: String,
    pub title: String,
    pub url: String,
    pub word_count: usize,
}

pub async fn scrape_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let Json(body) = payload?;
    let url = body
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::BadRequest("URL is required".to_string()))?;

    info!(url = %url, "Scrape requested");

    let result = state
        .deps
        .extractor
        .extract(ExtractionRequest::new(url))
        .await?;

    Ok(Json(ScrapeResponse {
        content: result.content,
        title: result.title,
        url: result.source_url,
        word_count: result.word_count,
    }))
}
