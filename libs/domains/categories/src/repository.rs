use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CategoryResult;
use crate::models::{Category, CategoryRequest};

/// Repository trait for Category persistence
///
/// Uniqueness and not-found decisions live in the service layer; the
/// repository only answers narrow persistence questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories ordered ascending by display order
    async fn find_all_ordered(&self) -> CategoryResult<Vec<Category>>;

    /// Get a category by ID
    async fn find_by_id(&self, id: i64) -> CategoryResult<Option<Category>>;

    /// Check whether any category holds the given name (exact match)
    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool>;

    /// Check whether a category other than `id` holds the given name
    async fn exists_by_name_excluding(&self, name: &str, id: i64) -> CategoryResult<bool>;

    /// Persist a new category
    async fn insert(&self, input: CategoryRequest) -> CategoryResult<Category>;

    /// Overwrite name and display order of an existing category
    async fn update(&self, id: i64, input: CategoryRequest) -> CategoryResult<Option<Category>>;

    /// Delete a category by ID, returning whether a row was removed
    async fn delete(&self, id: i64) -> CategoryResult<bool>;
}

/// In-memory implementation of CategoryRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<i64, Category>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all_ordered(&self) -> CategoryResult<Vec<Category>> {
        let categories = self.categories.read().await;

        let mut result: Vec<Category> = categories.values().cloned().collect();
        result.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(result)
    }

    async fn find_by_id(&self, id: i64) -> CategoryResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool> {
        let categories = self.categories.read().await;
        Ok(categories.values().any(|c| c.name == name))
    }

    async fn exists_by_name_excluding(&self, name: &str, id: i64) -> CategoryResult<bool> {
        let categories = self.categories.read().await;
        Ok(categories.values().any(|c| c.id != id && c.name == name))
    }

    async fn insert(&self, input: CategoryRequest) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;

        let category = Category {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: input.name,
            display_order: input.display_order,
        };
        categories.insert(category.id, category.clone());

        tracing::info!(category_id = category.id, "Created category");
        Ok(category)
    }

    async fn update(&self, id: i64, input: CategoryRequest) -> CategoryResult<Option<Category>> {
        let mut categories = self.categories.write().await;

        let Some(category) = categories.get_mut(&id) else {
            return Ok(None);
        };

        category.name = input.name;
        category.display_order = input.display_order;
        let updated = category.clone();

        tracing::info!(category_id = id, "Updated category");
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> CategoryResult<bool> {
        let mut categories = self.categories.write().await;

        if categories.remove(&id).is_some() {
            tracing::info!(category_id = id, "Deleted category");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
