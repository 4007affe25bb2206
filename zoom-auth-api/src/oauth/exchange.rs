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

//! Authorization code → token exchange against Zoom's OAuth token endpoint.

use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use zoom_auth_types::responses::TokenExchangeResponse;

use crate::config::OAuthConfig;
use crate::error::AppError;

/// Raw response from the OAuth token endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl From<OAuthTokenResponse> for TokenExchangeResponse {
    fn from(raw: OAuthTokenResponse) -> Self {
        Self {
            access_token: raw.access_token,
            refresh_token: raw.refresh_token,
            expires_in: raw.expires_in,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The provider answered with a non-success status.
    #[error("OAuth token request rejected with status {status}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never produced a response.
    #[error("OAuth token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered 2xx with a body we could not use.
    #[error("Failed to parse OAuth response: {0}")]
    Decode(String),
}

impl From<ExchangeError> for AppError {
    fn from(err: ExchangeError) -> Self {
        match &err {
            ExchangeError::Upstream { body, .. } if !body.trim().is_empty() => {
                match serde_json::from_str::<Value>(body) {
                    Ok(json) => AppError::upstream(json),
                    Err(_) => AppError::upstream(Value::String(body.clone())),
                }
            }
            // An empty rejection body still has a status worth reporting.
            _ => AppError::internal(&err.to_string()),
        }
    }
}

/// Exchange an authorization code for access and refresh tokens.
///
/// The client credentials travel as HTTP Basic auth; the body carries only
/// `grant_type`, `code` and `redirect_uri`. A single attempt is made.
pub async fn exchange_authorization_code(
    http: &reqwest::Client,
    oauth: &OAuthConfig,
    authorization_code: &str,
) -> Result<TokenExchangeResponse, ExchangeError> {
    let params = [
        ("grant_type", "authorization_code"),
        ("code", authorization_code),
        ("redirect_uri", oauth.redirect_uri.as_str()),
    ];

    let response = http
        .post(&oauth.token_url)
        .basic_auth(&oauth.client_id, Some(oauth.client_secret.expose_secret()))
        .form(&params)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("OAuth token request failed. Status: {status}, Body: {body}");
        return Err(ExchangeError::Upstream { status, body });
    }

    let body_text = response.text().await?;
    let token_response: OAuthTokenResponse =
        serde_json::from_str(&body_text).map_err(|e| ExchangeError::Decode(e.to_string()))?;

    tracing::debug!(
        expires_in = token_response.expires_in,
        scope = token_response.scope.as_deref().unwrap_or_default(),
        "OAuth token exchange succeeded"
    );

    Ok(token_response.into())
}
