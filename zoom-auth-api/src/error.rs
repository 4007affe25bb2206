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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `{ "error": ... }` paired with the appropriate
//! HTTP status code. Client mistakes map to 400; everything else maps to 500
//! and never takes the process down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use zoom_auth_types::ErrorResponse;

/// Application-level error that pairs an HTTP status code with an [`ErrorResponse`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl AppError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn missing_parameters() -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::missing_parameters())
    }

    pub fn invalid_role() -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::invalid_role())
    }

    pub fn authorization_code_required() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorResponse::authorization_code_required(),
        )
    }

    /// The identity provider rejected the request; `body` is its payload.
    pub fn upstream(body: Value) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse { error: body },
        )
    }

    pub fn internal(detail: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::message(detail),
        )
    }

    pub fn unknown() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::unknown())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
