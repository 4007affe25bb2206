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

//! OAuth2 helpers for the Zoom app: authorization code exchange.

pub mod exchange;

pub use exchange::{exchange_authorization_code, ExchangeError, OAuthTokenResponse};
