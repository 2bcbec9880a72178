// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use content_extraction::{ContentExtractor, MockFetcher};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{BaseAI, ServerDeps};

// =============================================================================
// Mock AI
// =============================================================================

/// Scripted AI: answers prompts from a queue of canned responses.
///
/// When the queue is empty every call fails, which keeps accidental extra
/// calls visible in tests.
#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a failed completion
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("MockAI has no scripted response")),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks plus the ServerDeps built from them
pub struct TestDependencies {
    pub fetcher: MockFetcher,
    pub ai: MockAI,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            fetcher: MockFetcher::new(),
            ai: MockAI::new(),
        }
    }

    pub fn with_fetcher(mut self, fetcher: MockFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_ai(mut self, ai: MockAI) -> Self {
        self.ai = ai;
        self
    }

    /// Build ServerDeps sharing state with these mocks
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            ContentExtractor::new().with_fetcher(self.fetcher.clone()),
            Arc::new(self.ai.clone()),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
