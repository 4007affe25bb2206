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

//! Zoom auth gateway entry point.
//!
//! A standalone Axum service that signs Zoom meeting joins and proxies the
//! Zoom OAuth authorization code exchange.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use zoom_auth_api::config::Config;
use zoom_auth_api::routes;
use zoom_auth_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    if config.oauth.is_none() {
        tracing::warn!("ZOOM_CLIENT_ID not set, OAuth token exchange is disabled");
    }

    let state = AppState::new(&config).context("failed to build HTTP client")?;
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("Zoom auth gateway listening on {}", config.listen_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
