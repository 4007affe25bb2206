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

//! Client tests against a mocked gateway.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoom_auth_client::zoom_auth_types::MeetingRole;
use zoom_auth_client::{ApiError, ZoomAuthClient};

#[tokio::test]
async fn generate_signature_sends_query_and_returns_signature() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/signature"))
        .and(query_param("meetingNumber", "85746065432"))
        .and(query_param("role", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "signature": "c2ln" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZoomAuthClient::new(&format!("{}/", server.uri()));
    let signature = client
        .generate_signature("85746065432", MeetingRole::Host)
        .await
        .unwrap();
    assert_eq!(signature, "c2ln");
}

#[tokio::test]
async fn generate_sdk_signature_uses_sdk_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/signature/sdk"))
        .and(query_param("role", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "signature": "jwt" })))
        .mount(&server)
        .await;

    let client = ZoomAuthClient::new(&server.uri());
    let signature = client
        .generate_sdk_signature("1", MeetingRole::Attendee)
        .await
        .unwrap();
    assert_eq!(signature, "jwt");
}

#[tokio::test]
async fn bad_request_carries_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Missing parameters" })),
        )
        .mount(&server)
        .await;

    let client = ZoomAuthClient::new(&server.uri());
    let err = client
        .generate_signature("", MeetingRole::Attendee)
        .await
        .unwrap_err();
    match err {
        ApiError::BadRequest(message) => assert_eq!(message, "Missing parameters"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn exchange_code_posts_json_and_returns_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_json(json!({ "code": "abc123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT",
            "refresh_token": "RT",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZoomAuthClient::new(&server.uri());
    let tokens = client.exchange_code("abc123").await.unwrap();
    assert_eq!(tokens.access_token, "AT");
    assert_eq!(tokens.refresh_token, "RT");
    assert_eq!(tokens.expires_in, 3600);
}

#[tokio::test]
async fn provider_failure_is_server_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": { "error": "invalid_grant" } })),
        )
        .mount(&server)
        .await;

    let client = ZoomAuthClient::new(&server.uri());
    let err = client.exchange_code("expired").await.unwrap_err();
    match err {
        ApiError::ServerError { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, r#"{"error":"invalid_grant"}"#);
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}
