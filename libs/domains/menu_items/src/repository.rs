use async_trait::async_trait;
use domain_categories::repository::{CategoryRepository, InMemoryCategoryRepository};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{MenuItemError, MenuItemResult};
use crate::models::{MenuItem, MenuItemFilter, MenuItemWrite};

/// Repository trait for MenuItem persistence.
///
/// Implementations resolve the category name on every read; the service has
/// already applied defaults and referential checks to [`MenuItemWrite`]
/// before any write reaches here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// List items matching all set predicates (AND-combined)
    async fn find_by_filter(&self, filter: MenuItemFilter) -> MenuItemResult<Vec<MenuItem>>;

    /// Get a menu item by ID
    async fn find_by_id(&self, id: i64) -> MenuItemResult<Option<MenuItem>>;

    /// Persist a new menu item
    async fn insert(&self, input: MenuItemWrite) -> MenuItemResult<MenuItem>;

    /// Overwrite all stored fields of an existing item
    async fn update(&self, id: i64, input: MenuItemWrite) -> MenuItemResult<Option<MenuItem>>;

    /// Set only the availability flag
    async fn set_availability(&self, id: i64, available: bool)
        -> MenuItemResult<Option<MenuItem>>;

    /// Delete a menu item by ID, returning whether a row was removed
    async fn delete(&self, id: i64) -> MenuItemResult<bool>;
}

/// Stored row shape for the in-memory repository; the category name is
/// resolved at read time like the SQL join does.
#[derive(Debug, Clone)]
struct StoredMenuItem {
    id: i64,
    name: String,
    price: i64,
    category_id: i64,
    description: Option<String>,
    available: bool,
}

/// In-memory implementation of MenuItemRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryMenuItemRepository {
    items: Arc<RwLock<HashMap<i64, StoredMenuItem>>>,
    next_id: Arc<AtomicI64>,
    categories: InMemoryCategoryRepository,
}

impl InMemoryMenuItemRepository {
    pub fn new(categories: InMemoryCategoryRepository) -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            categories,
        }
    }

    async fn category_name(&self, category_id: i64) -> MenuItemResult<String> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await
            .map_err(|e| MenuItemError::Internal(e.to_string()))?;

        Ok(category.map(|c| c.name).unwrap_or_default())
    }

    async fn resolve(&self, stored: StoredMenuItem) -> MenuItemResult<MenuItem> {
        let category_name = self.category_name(stored.category_id).await?;
        Ok(MenuItem {
            id: stored.id,
            name: stored.name,
            price: stored.price,
            category_id: stored.category_id,
            category_name,
            description: stored.description,
            available: stored.available,
        })
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuItemRepository {
    async fn find_by_filter(&self, filter: MenuItemFilter) -> MenuItemResult<Vec<MenuItem>> {
        let stored: Vec<StoredMenuItem> = {
            let items = self.items.read().await;

            let mut matching: Vec<StoredMenuItem> = items
                .values()
                .filter(|item| {
                    if let Some(category_id) = filter.category_id {
                        if item.category_id != category_id {
                            return false;
                        }
                    }
                    if let Some(available) = filter.available {
                        if item.available != available {
                            return false;
                        }
                    }
                    if let Some(ref keyword) = filter.keyword {
                        if !item
                            .name
                            .to_lowercase()
                            .contains(&keyword.to_lowercase())
                        {
                            return false;
                        }
                    }
                    true
                })
                .cloned()
                .collect();

            matching.sort_by_key(|item| item.id);
            matching
        };

        let mut result = Vec::with_capacity(stored.len());
        for item in stored {
            result.push(self.resolve(item).await?);
        }
        Ok(result)
    }

    async fn find_by_id(&self, id: i64) -> MenuItemResult<Option<MenuItem>> {
        let stored = {
            let items = self.items.read().await;
            items.get(&id).cloned()
        };

        match stored {
            Some(item) => Ok(Some(self.resolve(item).await?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, input: MenuItemWrite) -> MenuItemResult<MenuItem> {
        let stored = {
            let mut items = self.items.write().await;

            let stored = StoredMenuItem {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                name: input.name,
                price: input.price,
                category_id: input.category_id,
                description: input.description,
                available: input.available,
            };
            items.insert(stored.id, stored.clone());
            stored
        };

        tracing::info!(menu_item_id = stored.id, "Created menu item");
        self.resolve(stored).await
    }

    async fn update(&self, id: i64, input: MenuItemWrite) -> MenuItemResult<Option<MenuItem>> {
        let stored = {
            let mut items = self.items.write().await;

            let Some(item) = items.get_mut(&id) else {
                return Ok(None);
            };

            item.name = input.name;
            item.price = input.price;
            item.category_id = input.category_id;
            item.description = input.description;
            item.available = input.available;
            item.clone()
        };

        tracing::info!(menu_item_id = id, "Updated menu item");
        Ok(Some(self.resolve(stored).await?))
    }

    async fn set_availability(
        &self,
        id: i64,
        available: bool,
    ) -> MenuItemResult<Option<MenuItem>> {
        let stored = {
            let mut items = self.items.write().await;

            let Some(item) = items.get_mut(&id) else {
                return Ok(None);
            };

            item.available = available;
            item.clone()
        };

        tracing::info!(menu_item_id = id, available, "Set menu item availability");
        Ok(Some(self.resolve(stored).await?))
    }

    async fn delete(&self, id: i64) -> MenuItemResult<bool> {
        let mut items = self.items.write().await;

        if items.remove(&id).is_some() {
            tracing::info!(menu_item_id = id, "Deleted menu item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
