//! HTTP-level integration tests for the expense endpoints and the daily
//! budget evaluation attached to create/update.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Register a user and give them a January limit of 100 cents/day.
async fn seed_user_with_limit(pool: &PgPool, username: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, username).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "daily_limit": 100,
        "start_date": "2024-01-01",
        "end_date": "2024-01-31",
    });
    let response = post_json_auth(app, "/api/v1/limits", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    token
}

async fn create_expense(
    pool: &PgPool,
    token: &str,
    amount: i64,
    date: &str,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "title": "purchase",
        "amount": amount,
        "category": "Groceries",
        "date_of_purchase": date,
    });
    let response = post_json_auth(app, "/api/v1/expenses", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Budget evaluation on create
// ---------------------------------------------------------------------------

/// Staying under the covering limit reports within_limit = true.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_within_limit(pool: PgPool) {
    let token = seed_user_with_limit(&pool, "under").await;

    create_expense(&pool, &token, 80, "2024-01-15").await;
    let json = create_expense(&pool, &token, 15, "2024-01-15").await;

    let budget = &json["data"]["budget"];
    assert_eq!(budget["within_limit"], true);
    assert_eq!(budget["total_after"], 95);
    assert_eq!(budget["limit"], 100);
}

/// Exceeding the limit still persists the expense -- the report is advisory.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_over_limit_still_persists(pool: PgPool) {
    let token = seed_user_with_limit(&pool, "over").await;

    create_expense(&pool, &token, 80, "2024-01-15").await;
    let json = create_expense(&pool, &token, 25, "2024-01-15").await;

    let budget = &json["data"]["budget"];
    assert_eq!(budget["within_limit"], false);
    assert_eq!(budget["total_after"], 105);
    assert_eq!(budget["limit"], 100);

    // Both expenses are on record.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/expenses", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// A date outside any limit window reports limit = null, always within.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_outside_any_window(pool: PgPool) {
    let token = seed_user_with_limit(&pool, "outside").await;

    let json = create_expense(&pool, &token, 10_000, "2024-02-15").await;

    let budget = &json["data"]["budget"];
    assert_eq!(budget["within_limit"], true);
    assert_eq!(budget["total_after"], 10_000);
    assert!(budget["limit"].is_null());
}

/// Expenses on neighbouring days never count towards each other.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_evaluation_is_per_calendar_day(pool: PgPool) {
    let token = seed_user_with_limit(&pool, "daily").await;

    create_expense(&pool, &token, 90, "2024-01-14").await;
    let json = create_expense(&pool, &token, 90, "2024-01-15").await;

    let budget = &json["data"]["budget"];
    assert_eq!(budget["within_limit"], true);
    assert_eq!(budget["total_after"], 90);
}

// ---------------------------------------------------------------------------
// Budget evaluation on update
// ---------------------------------------------------------------------------

/// Editing an expense excludes its own stored amount from the day total.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_excludes_own_amount(pool: PgPool) {
    let token = seed_user_with_limit(&pool, "editor").await;

    let created = create_expense(&pool, &token, 80, "2024-01-15").await;
    let id = created["data"]["expense"]["id"].as_i64().unwrap();

    // Raising 80 -> 95 compares 95 against the limit, not 80 + 95.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/expenses/{id}"),
        &token,
        serde_json::json!({ "amount": 95 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["expense"]["amount"], 95);
    assert_eq!(json["data"]["budget"]["within_limit"], true);
    assert_eq!(json["data"]["budget"]["total_after"], 95);
}

// ---------------------------------------------------------------------------
// Validation and CRUD
// ---------------------------------------------------------------------------

/// An unknown category is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_category_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, "miscat").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "title": "mystery",
        "amount": 10,
        "category": "Gadgets",
        "date_of_purchase": "2024-01-15",
    });
    let response = post_json_auth(app, "/api/v1/expenses", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Deleting an expense removes it; a second delete is 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_expense(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, "deleter").await;

    let created = create_expense(&pool, &token, 10, "2024-06-01").await;
    let id = created["data"]["expense"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/expenses/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/expenses/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The list endpoint honours the inclusive date-range filter.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_with_date_range(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_user(app, "lister").await;

    create_expense(&pool, &token, 1, "2024-01-31").await;
    create_expense(&pool, &token, 2, "2024-02-01").await;
    create_expense(&pool, &token, 3, "2024-03-01").await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/expenses?start_date=2024-02-01&end_date=2024-02-29",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["amount"], 2);
}
