// Main entry point for API server

use anyhow::{Context, Result};
use quiz_server::kernel::{ContentExtractor, GeminiAI, ServerDeps};
use quiz_server::{server::build_app, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quiz_server=debug,content_extraction=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting company quiz API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.gemini_model,
        scrape_timeout_secs = config.scrape_timeout_secs,
        "Configuration loaded"
    );

    let extractor = ContentExtractor::from_config(config.extractor_config());
    let ai = GeminiAI::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    let deps = ServerDeps::new(extractor, Arc::new(ai));

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
