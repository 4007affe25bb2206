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

//! Success payloads for the Zoom auth gateway.
//!
//! Failures use [`crate::ErrorResponse`] instead.

use serde::{Deserialize, Serialize};

/// Response payload for `GET /signature` and `GET /signature/sdk` (200 OK).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SignatureResponse {
    pub signature: String,
}

/// Response payload for `POST /oauth/token` (200 OK).
///
/// Field names follow the OAuth token endpoint so the frontend can use the
/// provider's documentation directly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenExchangeResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of `access_token` in seconds.
    pub expires_in: u64,
}
