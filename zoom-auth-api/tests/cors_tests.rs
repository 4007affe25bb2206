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

//! Integration tests for the middleware stack: CORS and health.


use axum::body::Body;
use axum::http::{self, header, StatusCode};
use http_body_util::BodyExt;
use test_helpers::*;
use tower::ServiceExt;

#[tokio::test]
async fn test_cors_allows_any_origin_on_signature() {
    let app = build_app(None);
    let req = http::Request::builder()
        .method("GET")
        .uri("/signature?meetingNumber=1&role=0")
        .header(header::ORIGIN, "https://booking.example.org")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_headers_present_on_errors() {
    let app = build_app(None);
    let req = http::Request::builder()
        .method("POST")
        .uri("/oauth/token")
        .header(header::ORIGIN, "http://localhost:4200")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_cors_preflight_is_answered() {
    let app = build_app(None);
    let req = http::Request::builder()
        .method("OPTIONS")
        .uri("/oauth/token")
        .header(header::ORIGIN, "http://localhost:4200")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_health() {
    let app = build_app(None);
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
