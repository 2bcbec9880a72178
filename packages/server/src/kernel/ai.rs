// AI implementation using Gemini
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::GeminiClient;

use super::BaseAI;

/// Gemini implementation of AI capabilities
#[derive(Clone)]
pub struct GeminiAI {
    client: GeminiClient,
    model: String,
}

impl GeminiAI {
    pub fn new(api_key: String, model: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseAI for GeminiAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.client
            .generate_text(&self.model, prompt)
            .await
            .context("Gemini completion failed")
    }

    fn model(&self) -> &str {
        &self.model
    }
}
