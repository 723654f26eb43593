//! Planner item entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spendlog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A planned financial item from the `planner_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlannerItem {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new planner item.
#[derive(Debug, Deserialize)]
pub struct CreatePlannerItem {
    pub title: String,
    pub description: Option<String>,
    pub planned_date: NaiveDate,
}

/// DTO for updating an existing planner item. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdatePlannerItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub planned_date: Option<NaiveDate>,
}
