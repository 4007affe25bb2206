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

//! Zoom meeting-join signatures (HMAC-SHA256).
//!
//! A signature is built as follows:
//!
//! 1. `message = base64(apiKey || meetingNumber || timestamp || role)`
//! 2. `hash = base64(HMAC-SHA256(apiSecret, message))`
//! 3. `signature = base64(apiKey.meetingNumber.timestamp.role.hash)` with
//!    trailing `=` padding stripped.
//!
//! `timestamp` is epoch milliseconds backdated by [`TIMESTAMP_SKEW_MS`] so the
//! meeting client accepts it despite small clock differences.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use thiserror::Error;
use zoom_auth_types::MeetingRole;

type HmacSha256 = Hmac<Sha256>;

/// Backdate applied to the signing timestamp, in milliseconds.
pub const TIMESTAMP_SKEW_MS: i64 = 30_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid HMAC key")]
    InvalidKey,
    #[error("signature is not valid base64")]
    Encoding,
    #[error("signature must have 5 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid timestamp '{0}'")]
    Timestamp(String),
    #[error("invalid role '{0}'")]
    Role(String),
}

/// The decoded fields of a meeting-join signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePayload {
    pub api_key: String,
    pub meeting_number: String,
    /// Epoch milliseconds, already backdated.
    pub timestamp: i64,
    pub role: MeetingRole,
    /// Base64 HMAC-SHA256 digest.
    pub hash: String,
}

impl SignaturePayload {
    /// Compute the payload, including its hash, for the given inputs.
    pub fn sign(
        api_key: &str,
        api_secret: &SecretString,
        meeting_number: &str,
        timestamp: i64,
        role: MeetingRole,
    ) -> Result<Self, SignatureError> {
        let mac = hmac_for(api_key, api_secret, meeting_number, timestamp, role)?;
        let hash = STANDARD.encode(mac.finalize().into_bytes());

        Ok(Self {
            api_key: api_key.to_string(),
            meeting_number: meeting_number.to_string(),
            timestamp,
            role,
            hash,
        })
    }

    /// Encode into the opaque signature string handed to the meeting client.
    pub fn encode(&self) -> String {
        let joined = format!(
            "{}.{}.{}.{}.{}",
            self.api_key, self.meeting_number, self.timestamp, self.role, self.hash
        );
        STANDARD.encode(joined).trim_end_matches('=').to_string()
    }

    /// Check `hash` against the other fields using `api_secret`.
    pub fn verify(&self, api_secret: &SecretString) -> bool {
        let Ok(expected) = STANDARD.decode(&self.hash) else {
            return false;
        };
        match hmac_for(
            &self.api_key,
            api_secret,
            &self.meeting_number,
            self.timestamp,
            self.role,
        ) {
            Ok(mac) => mac.verify_slice(&expected).is_ok(),
            Err(_) => false,
        }
    }
}

/// Current time in epoch milliseconds minus [`TIMESTAMP_SKEW_MS`].
pub fn backdated_timestamp(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis() - TIMESTAMP_SKEW_MS
}

/// Generate a meeting-join signature for an explicit timestamp.
pub fn generate_signature(
    api_key: &str,
    api_secret: &SecretString,
    meeting_number: &str,
    role: MeetingRole,
    timestamp: i64,
) -> Result<String, SignatureError> {
    SignaturePayload::sign(api_key, api_secret, meeting_number, timestamp, role)
        .map(|payload| payload.encode())
}

/// Split a signature back into its five fields. Does not check the hash.
pub fn decode_signature(signature: &str) -> Result<SignaturePayload, SignatureError> {
    let bytes = STANDARD_NO_PAD
        .decode(signature.trim_end_matches('='))
        .map_err(|_| SignatureError::Encoding)?;
    let joined = String::from_utf8(bytes).map_err(|_| SignatureError::Encoding)?;

    let fields: Vec<&str> = joined.split('.').collect();
    let [api_key, meeting_number, timestamp, role, hash] = fields.as_slice() else {
        return Err(SignatureError::FieldCount(fields.len()));
    };

    Ok(SignaturePayload {
        api_key: api_key.to_string(),
        meeting_number: meeting_number.to_string(),
        timestamp: timestamp
            .parse()
            .map_err(|_| SignatureError::Timestamp(timestamp.to_string()))?,
        role: role
            .parse()
            .map_err(|_| SignatureError::Role(role.to_string()))?,
        hash: hash.to_string(),
    })
}

fn new_mac(api_secret: &SecretString) -> Result<HmacSha256, SignatureError> {
    HmacSha256::new_from_slice(api_secret.expose_secret().as_bytes())
        .map_err(|_| SignatureError::InvalidKey)
}

/// HMAC primed with the base64 message for the given fields.
fn hmac_for(
    api_key: &str,
    api_secret: &SecretString,
    meeting_number: &str,
    timestamp: i64,
    role: MeetingRole,
) -> Result<HmacSha256, SignatureError> {
    let message = STANDARD.encode(format!("{api_key}{meeting_number}{timestamp}{role}"));
    let mut mac = new_mac(api_secret)?;
    mac.update(message.as_bytes());
    Ok(mac)
}
