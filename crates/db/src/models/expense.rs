//! Expense entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spendlog_core::types::{Cents, DbId, Timestamp};
use sqlx::FromRow;

/// Full expense row from the `expenses` table.
///
/// `amount` is integer minor currency units (cents); `date_of_purchase` is
/// a calendar date -- day-level comparison is the only comparison the
/// domain ever makes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub amount: Cents,
    pub category: String,
    pub date_of_purchase: NaiveDate,
    pub description: Option<String>,
    /// Relative path of the receipt image under the upload root.
    pub receipt_image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new expense. The owner comes from the authenticated
/// request, never from the body.
#[derive(Debug, Deserialize)]
pub struct CreateExpense {
    pub title: String,
    pub amount: Cents,
    pub category: String,
    pub date_of_purchase: NaiveDate,
    pub description: Option<String>,
}

/// DTO for updating an existing expense. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateExpense {
    pub title: Option<String>,
    pub amount: Option<Cents>,
    pub category: Option<String>,
    pub date_of_purchase: Option<NaiveDate>,
    pub description: Option<String>,
}
