//! Menu items API routes

use axum::Router;
use domain_categories::PgCategoryRepository;
use domain_menu_items::{handlers, MenuItemService, PgMenuItemRepository};

use crate::state::AppState;

/// Create the menu items router backed by PostgreSQL.
///
/// The service holds its own category repository to resolve the referenced
/// category on create and update.
pub fn router(state: &AppState) -> Router {
    let repository = PgMenuItemRepository::new(state.db.clone());
    let categories = PgCategoryRepository::new(state.db.clone());
    let service = MenuItemService::new(repository, categories);
    handlers::router(service)
}
