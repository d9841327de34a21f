//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod analyze;
pub mod health;

use crate::config::Settings;
use crate::services::{GeminiClient, GenerativeModel};
use crate::utils::error::{AppError, AppResult};
use anyhow::Result;
use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    /// Present only when an API key was resolved at startup
    model: Option<Arc<dyn GenerativeModel>>,
}

impl AppState {
    /// Get the model client, failing fast when no API key is configured
    pub fn model(&self) -> AppResult<Arc<dyn GenerativeModel>> {
        self.model.clone().ok_or(AppError::ApiKeyMissing)
    }
}

/// Create application router
pub async fn create_router(settings: Settings) -> Result<Router> {
    // Without an API key the server still starts; requests fail with 500
    let model: Option<Arc<dyn GenerativeModel>> = if settings.has_api_key() {
        Some(Arc::new(GeminiClient::new(&settings)?))
    } else {
        None
    };

    Ok(create_router_with_model(settings, model))
}

/// Create application router with an explicit model client.
///
/// Tests use this entry point to inject a scripted model double.
pub fn create_router_with_model(
    settings: Settings,
    model: Option<Arc<dyn GenerativeModel>>,
) -> Router {
    // Anchor the uptime clock at router creation
    health::mark_started();

    let max_request_size = settings.server.max_request_size;

    // Create application state
    let app_state = Arc::new(AppState { settings, model });

    // Create routes; non-POST on the analysis routes gets the 405 body,
    // everything unrouted gets the 404 body
    Router::new()
        .route(
            "/analyze",
            post(analyze::analyze_text).fallback(method_not_allowed),
        )
        .route(
            "/analyze_image",
            post(analyze::analyze_image).fallback(method_not_allowed),
        )
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .fallback(not_found)
        .with_state(app_state)
        .layer(RequestBodyLimitLayer::new(max_request_size))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound
}
