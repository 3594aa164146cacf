// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use artblock_api::db::FirestoreDb;
use artblock_api::error::AppError;
use axum::http::StatusCode;
use axum::response::IntoResponse;

mod common;
use common::{body_json, create_test_app_with, get};

#[tokio::test]
async fn test_not_found_has_empty_body() {
    let response = AppError::NotFound("Curator c9 not found".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let response = AppError::Database("connection refused to 10.0.0.3".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "database_error" }));
}

#[tokio::test]
async fn test_internal_error_is_500() {
    let response = AppError::from(anyhow::anyhow!("boom")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "internal_error");
}

#[tokio::test]
async fn test_storage_fault_becomes_server_error() {
    let app = create_test_app_with(FirestoreDb::new_mock());

    for uri in [
        "/curators/c1",
        "/curators/username/alice",
        "/investors/i1",
        "/investors/username/bob",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{}",
            uri
        );
    }
}
