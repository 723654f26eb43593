//! Domain-level error type shared across crates.

use crate::types::DbId;

/// Errors produced by domain logic and surfaced through the API layer.
///
/// The API crate maps each variant onto an HTTP status; nothing here is
/// retried and nothing is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced record does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain check. The message is user-facing.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. duplicate username).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to touch this record.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unexpected internal failure. The message is logged, not shown.
    #[error("Internal error: {0}")]
    Internal(String),
}
