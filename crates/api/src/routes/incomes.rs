//! Route definitions for the `/incomes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::incomes;
use crate::state::AppState;

/// Routes mounted at `/incomes`.
///
/// ```text
/// GET    /       -> list_incomes (?start_date, end_date)
/// POST   /       -> create_income
/// GET    /{id}   -> get_income
/// PUT    /{id}   -> update_income
/// DELETE /{id}   -> delete_income
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(incomes::list_incomes).post(incomes::create_income))
        .route(
            "/{id}",
            get(incomes::get_income)
                .put(incomes::update_income)
                .delete(incomes::delete_income),
        )
}
