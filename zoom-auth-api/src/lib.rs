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

//! Zoom auth gateway library.
//!
//! This crate provides the Axum router, application state, and configuration
//! for the gateway that signs Zoom meeting joins and exchanges Zoom OAuth
//! authorization codes. The binary entry point (`main.rs`) is a thin wrapper
//! that calls into this library.

pub mod config;
pub mod error;
pub mod oauth;
pub mod routes;
pub mod sdk_token;
pub mod signature;
pub mod state;
