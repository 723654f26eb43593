//! Handlers for the `/planner` resource (planned financial items).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spendlog_core::error::CoreError;
use spendlog_core::ownership;
use spendlog_core::types::DbId;
use spendlog_db::models::planner_item::{CreatePlannerItem, PlannerItem, UpdatePlannerItem};
use spendlog_db::repositories::PlannerItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/planner
///
/// List the authenticated user's planner items, soonest first.
pub async fn list_items(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PlannerItem>>>> {
    let items = PlannerItemRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/planner/{id}
pub async fn get_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PlannerItem>>> {
    let item = find_owned(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/planner
pub async fn create_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePlannerItem>,
) -> AppResult<(StatusCode, Json<DataResponse<PlannerItem>>)> {
    if input.title.is_empty() {
        return Err(AppError::BadRequest("Title is required".into()));
    }

    let item = PlannerItemRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, item_id = item.id, "Planner item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/planner/{id}
pub async fn update_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlannerItem>,
) -> AppResult<Json<DataResponse<PlannerItem>>> {
    find_owned(&state, id, auth.user_id).await?;

    let item = PlannerItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "PlannerItem",
                id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, item_id = id, "Planner item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/planner/{id}
pub async fn delete_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned(&state, id, auth.user_id).await?;

    PlannerItemRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = auth.user_id, item_id = id, "Planner item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fetch a planner item and apply the ownership guard.
async fn find_owned(state: &AppState, id: DbId, acting_user_id: DbId) -> AppResult<PlannerItem> {
    let item = PlannerItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "PlannerItem",
                id,
            })
        })?;
    ownership::authorize(item.user_id, acting_user_id)?;
    Ok(item)
}
