//! Repository for the `incomes` table.

use chrono::NaiveDate;
use spendlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::income::{CreateIncome, Income, UpdateIncome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, source, amount, category, date_received, \
                        description, receipt_image, created_at, updated_at";

/// Provides CRUD operations for income records.
pub struct IncomeRepo;

impl IncomeRepo {
    /// Insert a new income record owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateIncome,
    ) -> Result<Income, sqlx::Error> {
        let query = format!(
            "INSERT INTO incomes (user_id, source, amount, category, date_received, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Income>(&query)
            .bind(user_id)
            .bind(&input.source)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date_received)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an income record by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Income>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM incomes WHERE id = $1");
        sqlx::query_as::<_, Income>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's income records, most recently received first,
    /// optionally restricted to a date range (both bounds inclusive).
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Income>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incomes
             WHERE user_id = $1
               AND ($2::DATE IS NULL OR date_received >= $2)
               AND ($3::DATE IS NULL OR date_received <= $3)
             ORDER BY date_received DESC, id DESC"
        );
        sqlx::query_as::<_, Income>(&query)
            .bind(user_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(pool)
            .await
    }

    /// Update an income record. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIncome,
    ) -> Result<Option<Income>, sqlx::Error> {
        let query = format!(
            "UPDATE incomes SET
                source = COALESCE($2, source),
                amount = COALESCE($3, amount),
                category = COALESCE($4, category),
                date_received = COALESCE($5, date_received),
                description = COALESCE($6, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Income>(&query)
            .bind(id)
            .bind(&input.source)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date_received)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an income record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM incomes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
