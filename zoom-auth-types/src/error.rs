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

//! Error body shared by every failing endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message returned when a signature request lacks `meetingNumber` or `role`.
pub const MISSING_PARAMETERS: &str = "Missing parameters";

/// Message returned when `role` is present but not 0 or 1.
pub const INVALID_ROLE: &str = "Invalid role";

/// Message returned when a token exchange request carries no `code`.
pub const AUTHORIZATION_CODE_REQUIRED: &str = "Authorization code is required";

/// Message returned when a failure carries nothing more specific.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// `{ "error": ... }` body of a failed response.
///
/// `error` is usually a string. When the identity provider rejects a token
/// exchange, it carries the provider's own JSON error body verbatim, e.g.
/// `{ "error": { "error": "invalid_grant" } }`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: Value,
}

impl ErrorResponse {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            error: Value::String(msg.into()),
        }
    }

    pub fn missing_parameters() -> Self {
        Self::message(MISSING_PARAMETERS)
    }

    pub fn invalid_role() -> Self {
        Self::message(INVALID_ROLE)
    }

    pub fn authorization_code_required() -> Self {
        Self::message(AUTHORIZATION_CODE_REQUIRED)
    }

    pub fn unknown() -> Self {
        Self::message(UNKNOWN_ERROR)
    }

    /// Returns the error as text when it is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        self.error.as_str()
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl std::error::Error for ErrorResponse {}
