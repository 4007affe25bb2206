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

//! Request types for the Zoom auth gateway.
//!
//! Every field is optional on the wire so the server can answer a missing
//! value with its own `{ "error": ... }` body instead of a framework
//! rejection.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /signature` and `GET /signature/sdk`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SignatureQuery {
    #[serde(rename = "meetingNumber", default)]
    pub meeting_number: Option<String>,

    /// Raw role value; validated by the server.
    #[serde(default)]
    pub role: Option<String>,
}

/// Request body for `POST /oauth/token`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TokenExchangeRequest {
    /// OAuth authorization code issued by Zoom.
    #[serde(default)]
    pub code: Option<String>,
}

impl TokenExchangeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }
}
