//! Integration tests for boundary validation and general HTTP
//! behaviour. These run against the real router and middleware stack
//! but only exercise paths that reject before any database query.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: leaderboard parameter validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn leaderboard_rejects_zero_limit() {
    let response = get(build_test_app(), "/api/v1/leaderboard?limit=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn leaderboard_rejects_oversized_limit() {
    let response = get(build_test_app(), "/api/v1/leaderboard?limit=101").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn leaderboard_rejects_negative_min_comparisons() {
    let response = get(build_test_app(), "/api/v1/leaderboard?min_comparisons=-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: malformed payloads are rejected at the boundary
// ---------------------------------------------------------------------------

#[tokio::test]
async fn vote_with_missing_fields_is_rejected() {
    // No winner_id: the schema check fires before any handler logic.
    let response = post_json(
        build_test_app(),
        "/api/v1/votes",
        json!({ "matchup_id": 1, "user_id": "5f0c1a52-7a05-4f2a-9f5e-0b54c4fba2a1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn vote_with_non_uuid_user_is_rejected() {
    let response = post_json(
        build_test_app(),
        "/api/v1/votes",
        json!({ "matchup_id": 1, "winner_id": 2, "user_id": "not-a-uuid" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn next_matchup_requires_a_user_id() {
    let response = get(build_test_app(), "/api/v1/matchups/next").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: gated admin endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeding_is_forbidden_when_disabled() {
    let response = post_json(
        build_test_app(),
        "/api/v1/admin/seed",
        json!({ "films": [], "matchups": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

// ---------------------------------------------------------------------------
// Test: general HTTP behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(build_test_app(), "/api/v1/leaderboard?limit=0").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
}

#[tokio::test]
async fn health_reports_degraded_without_a_database() {
    let response = get(build_test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert!(json["version"].is_string());
}
