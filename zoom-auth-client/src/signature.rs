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

//! Meeting signature endpoints: `/signature`, `/signature/sdk`.

use zoom_auth_types::{responses::SignatureResponse, MeetingRole};

use crate::error::ApiError;
use crate::{parse_response, ZoomAuthClient};

impl ZoomAuthClient {
    /// Get a legacy HMAC signature for joining a meeting.
    ///
    /// Calls `GET /signature?meetingNumber={meeting_number}&role={role}`.
    pub async fn generate_signature(
        &self,
        meeting_number: &str,
        role: MeetingRole,
    ) -> Result<String, ApiError> {
        self.fetch_signature("/signature", meeting_number, role).await
    }

    /// Get a Meeting SDK JWT for joining a meeting.
    ///
    /// Calls `GET /signature/sdk?meetingNumber={meeting_number}&role={role}`.
    pub async fn generate_sdk_signature(
        &self,
        meeting_number: &str,
        role: MeetingRole,
    ) -> Result<String, ApiError> {
        self.fetch_signature("/signature/sdk", meeting_number, role).await
    }

    async fn fetch_signature(
        &self,
        path: &str,
        meeting_number: &str,
        role: MeetingRole,
    ) -> Result<String, ApiError> {
        let role = role.to_string();
        let response = self
            .get(path)
            .query(&[("meetingNumber", meeting_number), ("role", role.as_str())])
            .send()
            .await?;
        let body: SignatureResponse = parse_response(response).await?;
        Ok(body.signature)
    }
}
