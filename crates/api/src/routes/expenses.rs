//! Route definitions for the `/expenses` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::expenses;
use crate::state::AppState;

/// Routes mounted at `/expenses`.
///
/// ```text
/// GET    /               -> list_expenses (?start_date, end_date)
/// POST   /               -> create_expense
/// GET    /{id}           -> get_expense
/// PUT    /{id}           -> update_expense
/// DELETE /{id}           -> delete_expense
/// POST   /{id}/receipt   -> upload_receipt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/{id}",
            get(expenses::get_expense)
                .put(expenses::update_expense)
                .delete(expenses::delete_expense),
        )
        .route("/{id}/receipt", post(expenses::upload_receipt))
}
