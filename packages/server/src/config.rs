use anyhow::{Context, Result};
use content_extraction::ExtractorConfig;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub scrape_timeout_secs: u64,
    pub scrape_user_agent: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY must be set")?,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| gemini_client::DEFAULT_MODEL.to_string()),
            scrape_timeout_secs: env::var("SCRAPE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("SCRAPE_TIMEOUT_SECS must be a whole number of seconds")?,
            scrape_user_agent: env::var("SCRAPE_USER_AGENT")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        })
    }

    /// Extractor settings derived from this config.
    pub fn extractor_config(&self) -> ExtractorConfig {
        let config =
            ExtractorConfig::default().with_timeout(Duration::from_secs(self.scrape_timeout_secs));

        match &self.scrape_user_agent {
            Some(agent) => config.with_user_agent(agent.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_config_overrides() {
        let config = Config {
            port: 8080,
            gemini_api_key: "k".into(),
            gemini_model: "gemini-1.5-flash".into(),
            scrape_timeout_secs: 12,
            scrape_user_agent: Some("QuizBot/1.0".into()),
        };

        let extractor = config.extractor_config();

        assert_eq!(extractor.timeout, Duration::from_secs(12));
        assert_eq!(extractor.user_agent, "QuizBot/1.0");
        assert_eq!(extractor.max_content_chars, 8000);
    }

    #[test]
    fn test_extractor_config_default_agent() {
        let config = Config {
            port: 8080,
            gemini_api_key: "k".into(),
            gemini_model: "m".into(),
            scrape_timeout_secs: 30,
            scrape_user_agent: None,
        };

        assert_eq!(
            config.extractor_config().user_agent,
            content_extraction::DEFAULT_USER_AGENT
        );
    }
}
