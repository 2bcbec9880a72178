//! Pure Gemini REST API client
//!
//! A clean, minimal client for Google's Generative Language API with no
//! domain-specific logic. Supports `generateContent` with text parts.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::GeminiClient;
//!
//! let client = GeminiClient::from_env()?;
//! let text = client.generate_text("gemini-1.5-flash", "Hello!").await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default model used when callers have no preference.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, tests, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Generate content.
    ///
    /// Sends the request to `models/{model}:generateContent` and returns the
    /// raw response.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model = %model,
            candidates = body.candidates.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Gemini generateContent"
        );

        Ok(body)
    }

    /// Send a single-turn prompt and return the first candidate's text.
    pub async fn generate_text(&self, model: &str, prompt: impl Into<String>) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.generate_content(model, &request).await?;

        if let Some(text) = response.text() {
            return Ok(text);
        }

        match response
            .prompt_feedback
            .and_then(|f| f.block_reason)
        {
            Some(reason) => Err(GeminiError::Api(format!("Prompt blocked: {}", reason))),
            None => Err(GeminiError::Parse("No text in Gemini response".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::new("test-key").with_base_url("https://custom.api.com/");

        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url(), "https://custom.api.com");
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new("k");
        assert_eq!(
            client.endpoint(DEFAULT_MODEL),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
