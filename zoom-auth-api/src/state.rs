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

//! Shared application state passed to every Axum handler via `State`.

use crate::config::{Config, OAuthConfig, SigningConfig};

/// Application state shared across all request handlers. Read-only.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Zoom API key/secret for meeting signatures.
    pub signing: SigningConfig,
    /// OAuth configuration. `None` disables the token exchange endpoint.
    pub oauth: Option<OAuthConfig>,
    /// Outbound HTTP client (connection pool shared across clones).
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            signing: config.signing.clone(),
            oauth: config.oauth.clone(),
            http,
        })
    }
}
