//! Repository for the `planner_items` table.

use spendlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::planner_item::{CreatePlannerItem, PlannerItem, UpdatePlannerItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, planned_date, created_at, updated_at";

/// Provides CRUD operations for planner items.
pub struct PlannerItemRepo;

impl PlannerItemRepo {
    /// Insert a new planner item owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePlannerItem,
    ) -> Result<PlannerItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO planner_items (user_id, title, description, planned_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlannerItem>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.planned_date)
            .fetch_one(pool)
            .await
    }

    /// Find a planner item by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PlannerItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planner_items WHERE id = $1");
        sqlx::query_as::<_, PlannerItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's planner items, soonest planned date first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PlannerItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM planner_items
             WHERE user_id = $1
             ORDER BY planned_date, id"
        );
        sqlx::query_as::<_, PlannerItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a planner item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlannerItem,
    ) -> Result<Option<PlannerItem>, sqlx::Error> {
        let query = format!(
            "UPDATE planner_items SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                planned_date = COALESCE($4, planned_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlannerItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.planned_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a planner item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planner_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
