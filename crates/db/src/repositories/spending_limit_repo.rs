//! Repository for the `spending_limits` table.

use chrono::NaiveDate;
use spendlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::spending_limit::{CreateSpendingLimit, SpendingLimit, UpdateSpendingLimit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, daily_limit, start_date, end_date, created_at, updated_at";

/// Provides CRUD operations and window lookups for spending limits.
pub struct SpendingLimitRepo;

impl SpendingLimitRepo {
    /// Insert a new spending limit owned by `user_id`, returning the created row.
    ///
    /// Callers must run the overlap check first; this method does not.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSpendingLimit,
    ) -> Result<SpendingLimit, sqlx::Error> {
        let query = format!(
            "INSERT INTO spending_limits (user_id, daily_limit, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SpendingLimit>(&query)
            .bind(user_id)
            .bind(input.daily_limit)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a spending limit by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SpendingLimit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spending_limits WHERE id = $1");
        sqlx::query_as::<_, SpendingLimit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all of a user's spending limits ordered by window start.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SpendingLimit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM spending_limits
             WHERE user_id = $1
             ORDER BY start_date"
        );
        sqlx::query_as::<_, SpendingLimit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's limits excluding one id. Feeds the overlap check when
    /// editing, so a limit is never compared against itself.
    pub async fn list_others(
        pool: &PgPool,
        user_id: DbId,
        exclude_limit_id: Option<DbId>,
    ) -> Result<Vec<SpendingLimit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM spending_limits
             WHERE user_id = $1
               AND ($2::BIGINT IS NULL OR id <> $2)
             ORDER BY start_date"
        );
        sqlx::query_as::<_, SpendingLimit>(&query)
            .bind(user_id)
            .bind(exclude_limit_id)
            .fetch_all(pool)
            .await
    }

    /// The limit whose closed window contains `date`, if any. By the
    /// non-overlap invariant there is at most one.
    pub async fn find_covering(
        pool: &PgPool,
        user_id: DbId,
        date: NaiveDate,
    ) -> Result<Option<SpendingLimit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM spending_limits
             WHERE user_id = $1
               AND start_date <= $2
               AND end_date >= $2"
        );
        sqlx::query_as::<_, SpendingLimit>(&query)
            .bind(user_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// Update a spending limit. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. Callers must
    /// re-run the overlap check with the effective window first.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSpendingLimit,
    ) -> Result<Option<SpendingLimit>, sqlx::Error> {
        let query = format!(
            "UPDATE spending_limits SET
                daily_limit = COALESCE($2, daily_limit),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SpendingLimit>(&query)
            .bind(id)
            .bind(input.daily_limit)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a spending limit. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM spending_limits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
