// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! Missing required fields must answer 400 with the JSON error envelope
//! before any store access happens, so these run against the offline
//! mock database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

/// POST a JSON body to a public route.
fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST a JSON body to a protected route with a bearer token.
fn authed_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn error_message(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], true);
    body["message"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_create_account_requires_full_name() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/create-account",
            serde_json::json!({"email": "a@example.com", "password": "secret"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "Full Name is required");
}

#[tokio::test]
async fn test_create_account_rejects_blank_email() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/create-account",
            serde_json::json!({"fullName": "A", "email": "  ", "password": "secret"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "Email is required");
}

#[tokio::test]
async fn test_login_requires_password() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            serde_json::json!({"email": "a@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "Password is required");
}

#[tokio::test]
async fn test_add_note_requires_title() {
    let (app, state) = common::create_test_app();
    let profile = common::test_profile("u-1", "a@example.com");
    let token = common::create_test_jwt(&profile, &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/add-note",
            &token,
            serde_json::json!({"content": "body text"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "Title is required");
}

#[tokio::test]
async fn test_add_note_requires_content() {
    let (app, state) = common::create_test_app();
    let profile = common::test_profile("u-1", "a@example.com");
    let token = common::create_test_jwt(&profile, &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/add-note",
            &token,
            serde_json::json!({"title": "Groceries", "tags": ["home"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "Content is required");
}

#[tokio::test]
async fn test_edit_note_rejects_empty_patch() {
    let (app, state) = common::create_test_app();
    let profile = common::test_profile("u-1", "a@example.com");
    let token = common::create_test_jwt(&profile, &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_json_request(
            "PUT",
            "/edit-note/some-note-id",
            &token,
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "No changes provided");
}

#[tokio::test]
async fn test_update_note_pinned_requires_flag() {
    let (app, state) = common::create_test_app();
    let profile = common::test_profile("u-1", "a@example.com");
    let token = common::create_test_jwt(&profile, &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_json_request(
            "PUT",
            "/update-note-pinned/some-note-id",
            &token,
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "isPinned is required");
}

#[tokio::test]
async fn test_search_notes_requires_query() {
    let (app, state) = common::create_test_app();
    let profile = common::test_profile("u-1", "a@example.com");
    let token = common::create_test_jwt(&profile, &state.config.jwt_signing_key);

    for uri in ["/search-notes", "/search-notes?query="] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert_eq!(error_message(response).await, "Search query is required");
    }
}
