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

//! Typed REST client for the Zoom auth gateway.
//!
//! Used by native tooling and integration tests; the browser frontend calls
//! the same endpoints directly.
//!
//! # Example
//!
//! ```no_run
//! use zoom_auth_client::ZoomAuthClient;
//! use zoom_auth_client::zoom_auth_types::MeetingRole;
//!
//! # async fn example() -> Result<(), zoom_auth_client::ApiError> {
//! let client = ZoomAuthClient::new("http://localhost:8080");
//!
//! let signature = client.generate_signature("85746065432", MeetingRole::Attendee).await?;
//! let tokens = client.exchange_code("code-from-zoom-redirect").await?;
//! println!("{signature} / expires in {}s", tokens.expires_in);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod oauth;
pub mod signature;

pub use error::ApiError;
pub use zoom_auth_types;

use reqwest::Client;
use zoom_auth_types::ErrorResponse;

/// A typed REST client for the Zoom auth gateway.
#[derive(Debug, Clone)]
pub struct ZoomAuthClient {
    base_url: String,
    http: Client,
}

impl ZoomAuthClient {
    /// Create a new client pointing at the given gateway base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8080"`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a gateway response, returning `T` on success or mapping the
/// `{ "error": ... }` body to [`ApiError`].
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(response.json().await?),
        400 => {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|err| err.to_string())
                .unwrap_or(text);
            Err(ApiError::BadRequest(message))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            log::warn!("Zoom auth gateway returned {status}: {text}");
            let body = serde_json::from_str::<ErrorResponse>(&text)
                .map(|err| err.to_string())
                .unwrap_or(text);
            Err(ApiError::ServerError { status, body })
        }
    }
}
