pub mod account;
pub mod auth;
pub mod expenses;
pub mod health;
pub mod incomes;
pub mod limits;
pub mod planner;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /account                         get, update (requires auth)
/// /account/picture                 upload profile picture
///
/// /expenses                        list, create
/// /expenses/{id}                   get, update, delete
/// /expenses/{id}/receipt           upload receipt image
///
/// /incomes                         list, create
/// /incomes/{id}                    get, update, delete
///
/// /limits                          list, create
/// /limits/{id}                     get, update, delete
///
/// /planner                         list, create
/// /planner/{id}                    get, update, delete
/// ```
///
/// Everything except `/auth/register`, `/auth/login`, and `/auth/refresh`
/// requires a Bearer token; owned records additionally pass the ownership
/// guard.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // The authenticated user's own profile.
        .nest("/account", account::router())
        // Expense tracking (with daily budget evaluation).
        .nest("/expenses", expenses::router())
        // Income tracking.
        .nest("/incomes", incomes::router())
        // Spending limit windows (with overlap validation).
        .nest("/limits", limits::router())
        // Planned financial items.
        .nest("/planner", planner::router())
}
