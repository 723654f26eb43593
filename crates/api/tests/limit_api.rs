//! HTTP-level integration tests for spending limit windows: range
//! validation, overlap rejection, and self-exclusion on edit.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json_auth, put_json_auth};
use sqlx::PgPool;

async fn create_limit(
    pool: &PgPool,
    token: &str,
    daily_limit: i64,
    start: &str,
    end: &str,
) -> axum::http::Response<axum::body::Body> {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "daily_limit": daily_limit,
        "start_date": start,
        "end_date": end,
    });
    post_json_auth(app, "/api/v1/limits", token, body).await
}

/// A reversed window is rejected before the overlap check and nothing is
/// stored.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_range_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, "reverser").await;

    let response = create_limit(&pool, &token, 100, "2024-02-01", "2024-01-01").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_RANGE");

    // Nothing was persisted.
    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/limits", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// An overlapping window is rejected with the conflicting ids.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_overlap_rejected_with_conflicting_ids(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, "january").await;

    let response = create_limit(&pool, &token, 100, "2024-01-01", "2024-01-31").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let existing_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = create_limit(&pool, &token, 100, "2024-01-15", "2024-02-15").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "LIMIT_OVERLAP");
    assert_eq!(json["conflicting_ids"], serde_json::json!([existing_id]));
}

/// An adjacent window (starting the day after the previous ends) is fine.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_adjacent_window_accepted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, "adjacent").await;

    let response = create_limit(&pool, &token, 100, "2024-01-01", "2024-01-31").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = create_limit(&pool, &token, 150, "2024-02-01", "2024-02-28").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Different users' windows never conflict with each other.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_windows_are_per_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = common::register_user(app, "first").await;
    let app = common::build_test_app(pool.clone());
    let second = common::register_user(app, "second").await;

    let response = create_limit(&pool, &first, 100, "2024-01-01", "2024-01-31").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Identical window, different owner: no conflict.
    let response = create_limit(&pool, &second, 100, "2024-01-01", "2024-01-31").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Editing a limit does not collide with the limit's own window.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_edit_excludes_own_window(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, "selfedit").await;

    let response = create_limit(&pool, &token, 100, "2024-01-01", "2024-01-31").await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Shrinking the window stays inside the original dates -- without
    // self-exclusion this would report an overlap with itself.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/limits/{id}"),
        &token,
        serde_json::json!({ "start_date": "2024-01-05", "end_date": "2024-01-25" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["start_date"], "2024-01-05");
}

/// Editing a limit into another limit's window is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_edit_into_other_window_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, "collider").await;

    let response = create_limit(&pool, &token, 100, "2024-01-01", "2024-01-31").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = create_limit(&pool, &token, 150, "2024-02-01", "2024-02-28").await;
    let feb_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/limits/{feb_id}"),
        &token,
        serde_json::json!({ "start_date": "2024-01-20" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "LIMIT_OVERLAP");
}
