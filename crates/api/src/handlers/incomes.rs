//! Handlers for the `/incomes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use spendlog_core::category::validate_income_category;
use spendlog_core::error::CoreError;
use spendlog_core::ownership;
use spendlog_core::types::DbId;
use spendlog_db::models::income::{CreateIncome, Income, UpdateIncome};
use spendlog_db::repositories::IncomeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the income list endpoint. Bounds are inclusive.
#[derive(Debug, serde::Deserialize)]
pub struct IncomeListParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /api/v1/incomes?start_date=&end_date=
pub async fn list_incomes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<IncomeListParams>,
) -> AppResult<Json<DataResponse<Vec<Income>>>> {
    let incomes = IncomeRepo::list_by_user(
        &state.pool,
        auth.user_id,
        params.start_date,
        params.end_date,
    )
    .await?;
    Ok(Json(DataResponse { data: incomes }))
}

/// GET /api/v1/incomes/{id}
pub async fn get_income(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Income>>> {
    let income = find_owned(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: income }))
}

/// POST /api/v1/incomes
pub async fn create_income(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateIncome>,
) -> AppResult<(StatusCode, Json<DataResponse<Income>>)> {
    if input.source.is_empty() {
        return Err(AppError::BadRequest("Source is required".into()));
    }
    validate_income_category(&input.category).map_err(AppError::BadRequest)?;

    let income = IncomeRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, income_id = income.id, "Income recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: income })))
}

/// PUT /api/v1/incomes/{id}
pub async fn update_income(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIncome>,
) -> AppResult<Json<DataResponse<Income>>> {
    find_owned(&state, id, auth.user_id).await?;

    if let Some(ref category) = input.category {
        validate_income_category(category).map_err(AppError::BadRequest)?;
    }

    let income = IncomeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Income",
                id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, income_id = id, "Income updated");

    Ok(Json(DataResponse { data: income }))
}

/// DELETE /api/v1/incomes/{id}
pub async fn delete_income(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned(&state, id, auth.user_id).await?;

    IncomeRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = auth.user_id, income_id = id, "Income deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fetch an income record and apply the ownership guard.
async fn find_owned(state: &AppState, id: DbId, acting_user_id: DbId) -> AppResult<Income> {
    let income = IncomeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Income",
                id,
            })
        })?;
    ownership::authorize(income.user_id, acting_user_id)?;
    Ok(income)
}
