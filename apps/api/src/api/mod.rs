//! API routes module

pub mod categories;
pub mod health;
pub mod menu_items;

use axum::Router;

use crate::state::AppState;

/// Create all versioned API routes (nested under `/api` by the router
/// assembly)
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/v1/categories", categories::router(state))
        .nest("/v1/menu-items", menu_items::router(state))
}
