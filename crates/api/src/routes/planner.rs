//! Route definitions for the `/planner` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::planner;
use crate::state::AppState;

/// Routes mounted at `/planner`.
///
/// ```text
/// GET    /       -> list_items
/// POST   /       -> create_item
/// GET    /{id}   -> get_item
/// PUT    /{id}   -> update_item
/// DELETE /{id}   -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planner::list_items).post(planner::create_item))
        .route(
            "/{id}",
            get(planner::get_item)
                .put(planner::update_item)
                .delete(planner::delete_item),
        )
}
