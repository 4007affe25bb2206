/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Axum router configuration for the Zoom auth gateway.

pub mod oauth;
pub mod signature;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with all gateway routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Meeting signatures
        .route("/signature", get(signature::signature))
        .route("/signature/sdk", get(signature::sdk_signature))
        // OAuth
        .route("/oauth/token", post(oauth::token))
        // Health check
        .route("/health", get(health_check))
}

/// Cross-origin policy: every origin, method and header is allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// The router with request tracing and CORS applied, ready to serve.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
