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

//! Application configuration loaded from environment variables.
//!
//! Every credential is wrapped in [`SecretString`] so that `Debug` output and
//! log lines never carry it.

use std::env;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Redirect URI pre-registered with the Zoom OAuth app.
///
/// Zoom rejects the exchange unless this matches the registered value exactly.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:4200/zoom/callback";

/// Zoom's OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://zoom.us/oauth/token";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SDK_TOKEN_TTL_SECS: i64 = 7200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Configuration for the Zoom auth gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8080").
    pub listen_addr: String,
    /// Credentials used to sign meeting-join signatures.
    pub signing: SigningConfig,
    /// OAuth configuration. `None` if `ZOOM_CLIENT_ID` is unset or empty.
    pub oauth: Option<OAuthConfig>,
    /// Timeout applied to outbound calls to Zoom.
    pub http_timeout: Duration,
}

/// Zoom API key/secret pair for meeting signatures.
#[derive(Debug, Clone)]
pub struct SigningConfig {
    pub api_key: String,
    pub api_secret: SecretString,
    /// Lifetime of SDK JWT signatures in seconds.
    pub sdk_token_ttl_secs: i64,
}

/// Zoom OAuth app configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub redirect_uri: String,
    pub token_url: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Required
    /// - `ZOOM_API_KEY`
    /// - `ZOOM_API_SECRET`
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8080"`)
    /// - `ZOOM_HTTP_TIMEOUT_SECS` (default: `"10"`)
    /// - `ZOOM_SDK_TOKEN_TTL_SECS` (default: `"7200"`)
    /// - OAuth: `ZOOM_CLIENT_ID`, `ZOOM_CLIENT_SECRET`, `ZOOM_REDIRECT_URI`,
    ///   `ZOOM_TOKEN_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let signing = SigningConfig {
            api_key: required("ZOOM_API_KEY")?,
            api_secret: SecretString::from(required("ZOOM_API_SECRET")?),
            sdk_token_ttl_secs: parse_or(
                var("ZOOM_SDK_TOKEN_TTL_SECS"),
                "ZOOM_SDK_TOKEN_TTL_SECS",
                "a positive integer",
                DEFAULT_SDK_TOKEN_TTL_SECS,
            )?,
        };
        if signing.sdk_token_ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                name: "ZOOM_SDK_TOKEN_TTL_SECS",
                expected: "a positive integer",
                value: signing.sdk_token_ttl_secs.to_string(),
            });
        }

        let listen_addr = var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let http_timeout = Duration::from_secs(parse_or(
            var("ZOOM_HTTP_TIMEOUT_SECS"),
            "ZOOM_HTTP_TIMEOUT_SECS",
            "an integer number of seconds",
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?);

        let oauth = var("ZOOM_CLIENT_ID")
            .map(|client_id| {
                let token_url =
                    var("ZOOM_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
                Url::parse(&token_url).map_err(|_| ConfigError::Invalid {
                    name: "ZOOM_TOKEN_URL",
                    expected: "a valid URL",
                    value: token_url.clone(),
                })?;

                Ok::<_, ConfigError>(OAuthConfig {
                    client_id,
                    client_secret: SecretString::from(required("ZOOM_CLIENT_SECRET")?),
                    redirect_uri: var("ZOOM_REDIRECT_URI")
                        .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
                    token_url,
                })
            })
            .transpose()?;

        Ok(Self {
            listen_addr,
            signing,
            oauth,
            http_timeout,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name,
                expected,
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    const SIGNING: [(&str, &str); 2] = [("ZOOM_API_KEY", "key"), ("ZOOM_API_SECRET", "shh")];

    #[test]
    fn defaults_apply_with_only_signing_credentials() {
        let config = load(&SIGNING).unwrap();
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.signing.api_key, "key");
        assert_eq!(config.signing.api_secret.expose_secret(), "shh");
        assert_eq!(config.signing.sdk_token_ttl_secs, 7200);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.oauth.is_none());
    }

    #[test]
    fn missing_api_secret_is_rejected() {
        let err = load(&[("ZOOM_API_KEY", "key")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ZOOM_API_SECRET"));
    }

    #[test]
    fn empty_client_id_disables_oauth() {
        let mut vars = SIGNING.to_vec();
        vars.push(("ZOOM_CLIENT_ID", ""));
        assert!(load(&vars).unwrap().oauth.is_none());
    }

    #[test]
    fn client_id_requires_client_secret() {
        let mut vars = SIGNING.to_vec();
        vars.push(("ZOOM_CLIENT_ID", "cid"));
        let err = load(&vars).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ZOOM_CLIENT_SECRET"));
    }

    #[test]
    fn oauth_defaults_to_zoom_endpoint_and_registered_redirect() {
        let mut vars = SIGNING.to_vec();
        vars.push(("ZOOM_CLIENT_ID", "cid"));
        vars.push(("ZOOM_CLIENT_SECRET", "csecret"));
        let oauth = load(&vars).unwrap().oauth.unwrap();
        assert_eq!(oauth.client_id, "cid");
        assert_eq!(oauth.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(oauth.redirect_uri, DEFAULT_REDIRECT_URI);
    }

    #[test]
    fn invalid_token_url_is_rejected() {
        let mut vars = SIGNING.to_vec();
        vars.push(("ZOOM_CLIENT_ID", "cid"));
        vars.push(("ZOOM_CLIENT_SECRET", "csecret"));
        vars.push(("ZOOM_TOKEN_URL", "not a url"));
        assert!(matches!(
            load(&vars).unwrap_err(),
            ConfigError::Invalid {
                name: "ZOOM_TOKEN_URL",
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let mut vars = SIGNING.to_vec();
        vars.push(("ZOOM_HTTP_TIMEOUT_SECS", "soon"));
        assert!(matches!(
            load(&vars).unwrap_err(),
            ConfigError::Invalid {
                name: "ZOOM_HTTP_TIMEOUT_SECS",
                ..
            }
        ));
    }

    #[test]
    fn zero_sdk_ttl_is_rejected() {
        let mut vars = SIGNING.to_vec();
        vars.push(("ZOOM_SDK_TOKEN_TTL_SECS", "0"));
        assert!(load(&vars).is_err());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut vars = SIGNING.to_vec();
        vars.push(("ZOOM_CLIENT_ID", "cid"));
        vars.push(("ZOOM_CLIENT_SECRET", "very-secret-client-value"));
        let config = load(&vars).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("very-secret-client-value"));
        assert!(!debug.contains("\"shh\""));
    }
}
