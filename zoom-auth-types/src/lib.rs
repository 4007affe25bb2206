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

//! Shared API types for the Zoom auth gateway.
//!
//! This crate defines the wire contract between the gateway and its
//! consumers (booking frontend, typed client, integration tests).
//! It is intentionally framework-agnostic: no axum, no reqwest.

pub mod error;
pub mod requests;
pub mod responses;
pub mod role;

pub use error::ErrorResponse;
pub use role::MeetingRole;
