use domain_categories::repository::CategoryRepository;
use std::sync::Arc;

use crate::error::{MenuItemError, MenuItemResult};
use crate::models::{MenuItem, MenuItemFilter, MenuItemRequest, MenuItemWrite};
use crate::repository::MenuItemRepository;

/// Service layer for MenuItem business rules.
///
/// Depends on the category repository to re-resolve the referenced category
/// on every create and update, which is what allows moving an item between
/// categories.
#[derive(Clone)]
pub struct MenuItemService<M: MenuItemRepository, C: CategoryRepository> {
    repository: Arc<M>,
    categories: Arc<C>,
}

impl<M: MenuItemRepository, C: CategoryRepository> MenuItemService<M, C> {
    pub fn new(repository: M, categories: C) -> Self {
        Self {
            repository: Arc::new(repository),
            categories: Arc::new(categories),
        }
    }

    async fn ensure_category_exists(&self, category_id: i64) -> MenuItemResult<()> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await
            .map_err(|e| MenuItemError::Internal(e.to_string()))?;

        if category.is_none() {
            return Err(MenuItemError::CategoryNotFound(category_id));
        }

        Ok(())
    }

    /// List menu items matching the filter.
    ///
    /// A blank or whitespace-only keyword means "no keyword filter", not
    /// "match the empty string".
    pub async fn list_menu_items(&self, filter: MenuItemFilter) -> MenuItemResult<Vec<MenuItem>> {
        let filter = MenuItemFilter {
            keyword: filter
                .keyword
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            ..filter
        };

        self.repository.find_by_filter(filter).await
    }

    /// Get a menu item by ID
    pub async fn get_menu_item(&self, id: i64) -> MenuItemResult<MenuItem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(MenuItemError::NotFound(id))
    }

    /// Create a menu item; `available` defaults to true when omitted
    pub async fn create_menu_item(&self, input: MenuItemRequest) -> MenuItemResult<MenuItem> {
        self.ensure_category_exists(input.category_id).await?;

        let write = MenuItemWrite::from_request(input, true);
        self.repository.insert(write).await
    }

    /// Update a menu item, overwriting everything except `available`, which
    /// keeps its stored value when the request omits it
    pub async fn update_menu_item(
        &self,
        id: i64,
        input: MenuItemRequest,
    ) -> MenuItemResult<MenuItem> {
        let existing = self.get_menu_item(id).await?;
        self.ensure_category_exists(input.category_id).await?;

        let write = MenuItemWrite::from_request(input, existing.available);
        self.repository
            .update(id, write)
            .await?
            .ok_or(MenuItemError::NotFound(id))
    }

    /// Flip the availability flag and persist the new value
    pub async fn toggle_availability(&self, id: i64) -> MenuItemResult<MenuItem> {
        let existing = self.get_menu_item(id).await?;

        self.repository
            .set_availability(id, !existing.available)
            .await?
            .ok_or(MenuItemError::NotFound(id))
    }

    /// Delete a menu item
    pub async fn delete_menu_item(&self, id: i64) -> MenuItemResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(MenuItemError::NotFound(id));
        }

        Ok(())
    }
}
