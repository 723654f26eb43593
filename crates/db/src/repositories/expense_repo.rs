//! Repository for the `expenses` table.

use chrono::NaiveDate;
use spendlog_core::types::{Cents, DbId};
use sqlx::PgPool;

use crate::models::expense::{CreateExpense, Expense, UpdateExpense};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, amount, category, date_of_purchase, \
                        description, receipt_image, created_at, updated_at";

/// Provides CRUD operations and day-total aggregation for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Insert a new expense owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateExpense,
    ) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (user_id, title, amount, category, date_of_purchase, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date_of_purchase)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an expense by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses WHERE id = $1");
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's expenses, most recent purchase first, optionally
    /// restricted to a date range (both bounds inclusive).
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM expenses
             WHERE user_id = $1
               AND ($2::DATE IS NULL OR date_of_purchase >= $2)
               AND ($3::DATE IS NULL OR date_of_purchase <= $3)
             ORDER BY date_of_purchase DESC, id DESC"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(user_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(pool)
            .await
    }

    /// Sum the amounts of a user's expenses on a single calendar date,
    /// optionally excluding one expense id (the one being edited).
    pub async fn sum_for_day(
        pool: &PgPool,
        user_id: DbId,
        date: NaiveDate,
        exclude_expense_id: Option<DbId>,
    ) -> Result<Cents, sqlx::Error> {
        let row: (Cents,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0)::BIGINT FROM expenses
             WHERE user_id = $1
               AND date_of_purchase = $2
               AND ($3::BIGINT IS NULL OR id <> $3)",
        )
        .bind(user_id)
        .bind(date)
        .bind(exclude_expense_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update an expense. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET
                title = COALESCE($2, title),
                amount = COALESCE($3, amount),
                category = COALESCE($4, category),
                date_of_purchase = COALESCE($5, date_of_purchase),
                description = COALESCE($6, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date_of_purchase)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Point the expense's receipt image at a new stored file.
    ///
    /// Returns `true` if the row was updated.
    pub async fn update_receipt_image(
        pool: &PgPool,
        id: DbId,
        receipt_image: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE expenses SET receipt_image = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(receipt_image)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an expense. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
