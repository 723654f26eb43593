//! Spending limit entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spendlog_core::types::{Cents, DbId, Timestamp};
use sqlx::FromRow;

/// Full spending limit row from the `spending_limits` table.
///
/// `[start_date, end_date]` is a closed interval. Rows for the same user
/// never overlap -- enforced by `spendlog_core::limits` before insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SpendingLimit {
    pub id: DbId,
    pub user_id: DbId,
    pub daily_limit: Cents,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new spending limit.
#[derive(Debug, Deserialize)]
pub struct CreateSpendingLimit {
    pub daily_limit: Cents,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// DTO for updating an existing spending limit. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSpendingLimit {
    pub daily_limit: Option<Cents>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
