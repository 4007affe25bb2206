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

//! OAuth route handler: authorization code exchange.

use axum::{body::Bytes, extract::State, Json};
use zoom_auth_types::{requests::TokenExchangeRequest, responses::TokenExchangeResponse};

use crate::error::AppError;
use crate::oauth;
use crate::state::AppState;

/// Pull a non-empty `code` out of a JSON body.
///
/// A body that is not JSON, or a `code` that is not a string, counts as missing.
fn authorization_code(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<TokenExchangeRequest>(body)
        .ok()
        .and_then(|req| req.code)
        .filter(|code| !code.trim().is_empty())
}

/// POST /oauth/token
///
/// Exchanges the authorization code from Zoom's redirect for access and
/// refresh tokens.
pub async fn token(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenExchangeResponse>, AppError> {
    let code = authorization_code(&body).ok_or_else(AppError::authorization_code_required)?;

    let oauth_cfg = state
        .oauth
        .as_ref()
        .ok_or_else(|| AppError::internal("OAuth not configured"))?;

    let tokens = oauth::exchange_authorization_code(&state.http, oauth_cfg, &code).await?;

    tracing::info!(
        "Zoom OAuth token exchange succeeded, access token expires in {}s",
        tokens.expires_in
    );
    Ok(Json(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_code_from_json_body() {
        assert_eq!(authorization_code(br#"{"code":"abc123"}"#).as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_empty_or_malformed_code_is_none() {
        assert_eq!(authorization_code(b""), None);
        assert_eq!(authorization_code(b"{}"), None);
        assert_eq!(authorization_code(br#"{"code":""}"#), None);
        assert_eq!(authorization_code(br#"{"code":42}"#), None);
        assert_eq!(authorization_code(b"code=abc123"), None);
    }
}
