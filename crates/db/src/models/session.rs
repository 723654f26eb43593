//! User session model and DTOs.

use spendlog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `user_sessions` table. One row per issued
/// refresh token; only the token's SHA-256 hash is stored.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
