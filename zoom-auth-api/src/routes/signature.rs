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

//! Handlers that sign meeting-join requests.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use zoom_auth_types::{requests::SignatureQuery, responses::SignatureResponse, MeetingRole};

use crate::error::AppError;
use crate::sdk_token::generate_sdk_token;
use crate::signature::{backdated_timestamp, generate_signature};
use crate::state::AppState;

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Validate `meetingNumber` and `role`. Absent or blank values are "missing".
///
/// The meeting number is signed exactly as received.
fn parse_query(query: &SignatureQuery) -> Result<(&str, MeetingRole), AppError> {
    let (Some(meeting_number), Some(role)) = (present(&query.meeting_number), present(&query.role))
    else {
        return Err(AppError::missing_parameters());
    };

    let role = role.parse().map_err(|_| AppError::invalid_role())?;
    Ok((meeting_number, role))
}

/// GET /signature?meetingNumber=...&role=0|1
///
/// Returns the legacy HMAC meeting signature.
pub async fn signature(
    State(state): State<AppState>,
    Query(query): Query<SignatureQuery>,
) -> Result<Json<SignatureResponse>, AppError> {
    let (meeting_number, role) = parse_query(&query)?;

    let signature = generate_signature(
        &state.signing.api_key,
        &state.signing.api_secret,
        meeting_number,
        role,
        backdated_timestamp(Utc::now()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign meeting {meeting_number}: {e}");
        AppError::internal(&e.to_string())
    })?;

    tracing::info!("Issued signature for meeting {meeting_number} (role {role})");
    Ok(Json(SignatureResponse { signature }))
}

/// GET /signature/sdk?meetingNumber=...&role=0|1
///
/// Returns a Meeting SDK JWT for the same inputs.
pub async fn sdk_signature(
    State(state): State<AppState>,
    Query(query): Query<SignatureQuery>,
) -> Result<Json<SignatureResponse>, AppError> {
    let (meeting_number, role) = parse_query(&query)?;

    let signature = generate_sdk_token(
        &state.signing.api_key,
        &state.signing.api_secret,
        meeting_number,
        role,
        Utc::now(),
        state.signing.sdk_token_ttl_secs,
    )?;

    tracing::info!("Issued SDK signature for meeting {meeting_number} (role {role})");
    Ok(Json(SignatureResponse { signature }))
}
