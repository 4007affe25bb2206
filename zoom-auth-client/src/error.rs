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

//! Error types for the Zoom auth gateway client.

use thiserror::Error;

/// Errors returned by [`ZoomAuthClient`](crate::ZoomAuthClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The gateway rejected the request (HTTP 400), e.g. a missing parameter.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A server error with status code and the gateway's `error` value.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
