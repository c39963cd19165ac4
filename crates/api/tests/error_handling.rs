//! Tests for the mapping from application errors to HTTP responses.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog_api::error::AppError;
use catalog_core::error::CoreError;
use common::body_json;

#[tokio::test]
async fn not_found_maps_to_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Product",
        id: 7,
    });
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 7 not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let err = AppError::Core(CoreError::Validation("name must not be blank".into()));
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name must not be blank");
}

#[tokio::test]
async fn database_errors_are_sanitized() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
