//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;
use spendlog_core::budget::BudgetReport;
use spendlog_db::models::expense::Expense;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Response for expense create/update: the persisted row plus the advisory
/// daily-budget report. The report never blocks the write; `within_limit:
/// false` is the client's cue to render a warning.
#[derive(Debug, Serialize)]
pub struct ExpenseWithBudget {
    pub expense: Expense,
    pub budget: BudgetReport,
}
