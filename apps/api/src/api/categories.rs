//! Categories API routes

use axum::Router;
use domain_categories::{handlers, CategoryService, PgCategoryRepository};

use crate::state::AppState;

/// Create the categories router backed by PostgreSQL
pub fn router(state: &AppState) -> Router {
    let repository = PgCategoryRepository::new(state.db.clone());
    let service = CategoryService::new(repository);
    handlers::router(service)
}
