//! Route definitions for the `/limits` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::limits;
use crate::state::AppState;

/// Routes mounted at `/limits`.
///
/// ```text
/// GET    /       -> list_limits
/// POST   /       -> create_limit
/// GET    /{id}   -> get_limit
/// PUT    /{id}   -> update_limit
/// DELETE /{id}   -> delete_limit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(limits::list_limits).post(limits::create_limit))
        .route(
            "/{id}",
            get(limits::get_limit)
                .put(limits::update_limit)
                .delete(limits::delete_limit),
        )
}
