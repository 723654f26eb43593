//! Route definitions for the `/account` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes mounted at `/account`.
///
/// ```text
/// GET /          -> get_account
/// PUT /          -> update_account
/// PUT /picture   -> upload_picture
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(account::get_account).put(account::update_account),
        )
        .route("/picture", put(account::upload_picture))
}
