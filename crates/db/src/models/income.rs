//! Income entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spendlog_core::types::{Cents, DbId, Timestamp};
use sqlx::FromRow;

/// Full income row from the `incomes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Income {
    pub id: DbId,
    pub user_id: DbId,
    pub source: String,
    pub amount: Cents,
    pub category: String,
    pub date_received: NaiveDate,
    pub description: Option<String>,
    pub receipt_image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new income record.
#[derive(Debug, Deserialize)]
pub struct CreateIncome {
    pub source: String,
    pub amount: Cents,
    pub category: String,
    pub date_received: NaiveDate,
    pub description: Option<String>,
}

/// DTO for updating an existing income record. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateIncome {
    pub source: Option<String>,
    pub amount: Option<Cents>,
    pub category: Option<String>,
    pub date_received: Option<NaiveDate>,
    pub description: Option<String>,
}
