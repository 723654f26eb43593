//! Handlers for the `/limits` resource (spending limits).
//!
//! Create and update run the window validation first: range ordering,
//! then overlap against the user's other limits. Either failure is a
//! user-facing validation message and nothing is persisted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spendlog_core::error::CoreError;
use spendlog_core::limits::{check_overlap, DateRange};
use spendlog_core::ownership;
use spendlog_core::types::DbId;
use spendlog_db::models::spending_limit::{
    CreateSpendingLimit, SpendingLimit, UpdateSpendingLimit,
};
use spendlog_db::repositories::SpendingLimitRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/limits
pub async fn list_limits(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SpendingLimit>>>> {
    let limits = SpendingLimitRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: limits }))
}

/// GET /api/v1/limits/{id}
pub async fn get_limit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SpendingLimit>>> {
    let limit = find_owned(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: limit }))
}

/// POST /api/v1/limits
pub async fn create_limit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSpendingLimit>,
) -> AppResult<(StatusCode, Json<DataResponse<SpendingLimit>>)> {
    validate_window(&state, auth.user_id, input.start_date, input.end_date, None).await?;

    let limit = SpendingLimitRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        limit_id = limit.id,
        start = %limit.start_date,
        end = %limit.end_date,
        "Spending limit created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: limit })))
}

/// PUT /api/v1/limits/{id}
///
/// The overlap check runs against the effective window (body fields win,
/// the stored row fills the gaps) and skips the limit's own row.
pub async fn update_limit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSpendingLimit>,
) -> AppResult<Json<DataResponse<SpendingLimit>>> {
    let existing = find_owned(&state, id, auth.user_id).await?;

    let start = input.start_date.unwrap_or(existing.start_date);
    let end = input.end_date.unwrap_or(existing.end_date);
    validate_window(&state, auth.user_id, start, end, Some(id)).await?;

    let limit = SpendingLimitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "SpendingLimit",
                id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, limit_id = id, "Spending limit updated");

    Ok(Json(DataResponse { data: limit }))
}

/// DELETE /api/v1/limits/{id}
pub async fn delete_limit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned(&state, id, auth.user_id).await?;

    SpendingLimitRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = auth.user_id, limit_id = id, "Spending limit deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a spending limit and apply the ownership guard.
async fn find_owned(state: &AppState, id: DbId, acting_user_id: DbId) -> AppResult<SpendingLimit> {
    let limit = SpendingLimitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "SpendingLimit",
                id,
            })
        })?;
    ownership::authorize(limit.user_id, acting_user_id)?;
    Ok(limit)
}

/// Validate a candidate window against the user's other limits.
async fn validate_window(
    state: &AppState,
    user_id: DbId,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
    exclude_limit_id: Option<DbId>,
) -> AppResult<()> {
    let others = SpendingLimitRepo::list_others(&state.pool, user_id, exclude_limit_id).await?;
    let existing: Vec<(DbId, DateRange)> = others
        .iter()
        .map(|l| {
            (
                l.id,
                DateRange {
                    start: l.start_date,
                    end: l.end_date,
                },
            )
        })
        .collect();

    check_overlap(start, end, &existing)?;
    Ok(())
}
