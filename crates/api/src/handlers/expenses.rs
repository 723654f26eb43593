//! Handlers for the `/expenses` resource.
//!
//! Create and update run the daily budget evaluation and return its report
//! alongside the persisted row. Going over the limit is advisory only --
//! the write is never blocked.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use spendlog_core::budget::{self, BudgetReport};
use spendlog_core::category::validate_expense_category;
use spendlog_core::error::CoreError;
use spendlog_core::ownership;
use spendlog_core::picture;
use spendlog_core::types::DbId;
use spendlog_db::models::expense::{CreateExpense, Expense, UpdateExpense};
use spendlog_db::repositories::{ExpenseRepo, SpendingLimitRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::account::{read_picture_field, write_upload};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, ExpenseWithBudget};
use crate::state::AppState;

/// Query parameters for the expense list endpoint. Bounds are inclusive.
#[derive(Debug, serde::Deserialize)]
pub struct ExpenseListParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /api/v1/expenses?start_date=&end_date=
///
/// List the authenticated user's expenses, most recent purchase first.
pub async fn list_expenses(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ExpenseListParams>,
) -> AppResult<Json<DataResponse<Vec<Expense>>>> {
    let expenses = ExpenseRepo::list_by_user(
        &state.pool,
        auth.user_id,
        params.start_date,
        params.end_date,
    )
    .await?;
    Ok(Json(DataResponse { data: expenses }))
}

/// GET /api/v1/expenses/{id}
pub async fn get_expense(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Expense>>> {
    let expense = find_owned(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: expense }))
}

/// POST /api/v1/expenses
///
/// Create an expense and report how it lands against the day's limit.
pub async fn create_expense(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<DataResponse<ExpenseWithBudget>>)> {
    if input.title.is_empty() {
        return Err(AppError::BadRequest("Title is required".into()));
    }
    validate_expense_category(&input.category).map_err(AppError::BadRequest)?;

    let report =
        evaluate_budget(&state, auth.user_id, input.date_of_purchase, input.amount, None).await?;

    let expense = ExpenseRepo::create(&state.pool, auth.user_id, &input).await?;

    if !report.within_limit {
        tracing::warn!(
            user_id = auth.user_id,
            expense_id = expense.id,
            total_after = report.total_after,
            limit = ?report.limit,
            "Expense pushes the day over its spending limit"
        );
    }
    tracing::info!(user_id = auth.user_id, expense_id = expense.id, "Expense created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ExpenseWithBudget { expense, budget: report },
        }),
    ))
}

/// PUT /api/v1/expenses/{id}
///
/// Update an expense. The budget evaluation excludes the expense's own
/// previous amount, so editing a row never double-counts it.
pub async fn update_expense(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExpense>,
) -> AppResult<Json<DataResponse<ExpenseWithBudget>>> {
    let existing = find_owned(&state, id, auth.user_id).await?;

    if let Some(ref category) = input.category {
        validate_expense_category(category).map_err(AppError::BadRequest)?;
    }

    // Evaluate against the effective values: body fields win, the stored
    // row fills the gaps.
    let date = input.date_of_purchase.unwrap_or(existing.date_of_purchase);
    let amount = input.amount.unwrap_or(existing.amount);
    let report = evaluate_budget(&state, auth.user_id, date, amount, Some(id)).await?;

    let expense = ExpenseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Expense",
                id,
            })
        })?;

    if !report.within_limit {
        tracing::warn!(
            user_id = auth.user_id,
            expense_id = id,
            total_after = report.total_after,
            limit = ?report.limit,
            "Edited expense pushes the day over its spending limit"
        );
    }

    Ok(Json(DataResponse {
        data: ExpenseWithBudget { expense, budget: report },
    }))
}

/// DELETE /api/v1/expenses/{id}
pub async fn delete_expense(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned(&state, id, auth.user_id).await?;

    ExpenseRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = auth.user_id, expense_id = id, "Expense deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/expenses/{id}/receipt
///
/// Multipart upload of a receipt image. Stored as-is (receipts must stay
/// legible) under `<upload_dir>/receipt_pics/`.
pub async fn upload_receipt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Expense>>> {
    find_owned(&state, id, auth.user_id).await?;

    let (bytes, extension) = read_picture_field(multipart, state.config.max_upload_bytes).await?;
    picture::validate_receipt(&bytes)?;

    let relative_path = format!("receipt_pics/{}.{extension}", picture::random_stem());
    write_upload(&state, &relative_path, &bytes).await?;

    ExpenseRepo::update_receipt_image(&state.pool, id, &relative_path).await?;

    let expense = find_owned(&state, id, auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, expense_id = id, path = %relative_path, "Receipt stored");

    Ok(Json(DataResponse { data: expense }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch an expense and apply the ownership guard: 404 when the row does
/// not exist, 403 when it belongs to someone else.
async fn find_owned(state: &AppState, id: DbId, acting_user_id: DbId) -> AppResult<Expense> {
    let expense = ExpenseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Expense",
                id,
            })
        })?;
    ownership::authorize(expense.user_id, acting_user_id)?;
    Ok(expense)
}

/// Run the daily budget evaluation for a candidate amount on a date:
/// sum the day's other expenses, look up the covering limit (at most one
/// by the non-overlap invariant), and compute the advisory report.
async fn evaluate_budget(
    state: &AppState,
    user_id: DbId,
    date: NaiveDate,
    candidate_amount: i64,
    exclude_expense_id: Option<DbId>,
) -> AppResult<BudgetReport> {
    let day_total =
        ExpenseRepo::sum_for_day(&state.pool, user_id, date, exclude_expense_id).await?;
    let covering = SpendingLimitRepo::find_covering(&state.pool, user_id, date).await?;
    Ok(budget::evaluate(
        day_total,
        candidate_amount,
        covering.map(|l| l.daily_limit),
    ))
}
