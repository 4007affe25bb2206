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

//! Meeting SDK JWT signatures.
//!
//! Newer Zoom Meeting SDK clients authenticate with an HS256 JWT signed by
//! the same API secret instead of the dot-joined HMAC signature.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use zoom_auth_types::MeetingRole;

use crate::error::AppError;

/// Backdate applied to `iat`, in seconds.
pub const IAT_SKEW_SECS: i64 = 30;

/// Claims understood by the Zoom Meeting SDK.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SdkTokenClaims {
    pub sdk_key: String,
    pub app_key: String,
    /// Meeting number.
    pub mn: String,
    pub role: MeetingRole,
    pub iat: i64,
    pub exp: i64,
    pub token_exp: i64,
}

impl SdkTokenClaims {
    pub fn new(
        api_key: &str,
        meeting_number: &str,
        role: MeetingRole,
        now: DateTime<Utc>,
        ttl_secs: i64,
    ) -> Self {
        let iat = now.timestamp() - IAT_SKEW_SECS;
        let exp = iat + ttl_secs;
        Self {
            sdk_key: api_key.to_string(),
            app_key: api_key.to_string(),
            mn: meeting_number.to_string(),
            role,
            iat,
            exp,
            token_exp: exp,
        }
    }
}

/// Sign an SDK JWT for the given meeting and role.
pub fn generate_sdk_token(
    api_key: &str,
    api_secret: &SecretString,
    meeting_number: &str,
    role: MeetingRole,
    now: DateTime<Utc>,
    ttl_secs: i64,
) -> Result<String, AppError> {
    let claims = SdkTokenClaims::new(api_key, meeting_number, role, now, ttl_secs);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(api_secret.expose_secret().as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign SDK JWT: {e}");
        AppError::internal("failed to generate SDK signature")
    })
}
