//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    gemini_handler, generate_questions_handler, health_handler, pricing_quote_handler,
    scrape_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/scrape", post(scrape_handler))
        .route("/api/gemini", post(gemini_handler))
        .route("/api/questions/generate", post(generate_questions_handler))
        .route("/api/pricing/quote", post(pricing_quote_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
