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

//! OAuth endpoint: `/oauth/token`.

use zoom_auth_types::{requests::TokenExchangeRequest, responses::TokenExchangeResponse};

use crate::error::ApiError;
use crate::{parse_response, ZoomAuthClient};

impl ZoomAuthClient {
    /// Exchange a Zoom authorization code for access and refresh tokens.
    ///
    /// Calls `POST /oauth/token` with `{ "code": ... }`.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenExchangeResponse, ApiError> {
        let response = self
            .post("/oauth/token")
            .json(&TokenExchangeRequest::new(code))
            .send()
            .await?;
        parse_response(response).await
    }
}
