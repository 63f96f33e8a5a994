use std::sync::Arc;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryRequest};
use crate::repository::CategoryRepository;

/// Service layer for Category business rules.
///
/// Field-level validation happens before the service is called; this layer
/// owns name trimming, uniqueness checks, and not-found translation.
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all categories ordered by display order
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.find_all_ordered().await
    }

    /// Get a category by ID
    pub async fn get_category(&self, id: i64) -> CategoryResult<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Create a new category, rejecting duplicate names.
    ///
    /// The name is trimmed before the uniqueness check, so a name differing
    /// from an existing one only by surrounding whitespace still conflicts.
    /// The storage layer's unique index is the real guarantee under
    /// concurrent writers.
    pub async fn create_category(&self, input: CategoryRequest) -> CategoryResult<Category> {
        let input = input.normalized();

        if self.repository.exists_by_name(&input.name).await? {
            return Err(CategoryError::DuplicateName(input.name));
        }

        self.repository.insert(input).await
    }

    /// Update a category, rejecting names held by a different category.
    ///
    /// The id is resolved first, so updating a missing category reports
    /// not-found even when the requested name is taken. Renaming a category
    /// to its own current name is a no-op, not a conflict.
    pub async fn update_category(
        &self,
        id: i64,
        input: CategoryRequest,
    ) -> CategoryResult<Category> {
        let input = input.normalized();

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(CategoryError::NotFound(id));
        }

        if self
            .repository
            .exists_by_name_excluding(&input.name, id)
            .await?
        {
            return Err(CategoryError::DuplicateName(input.name));
        }

        self.repository
            .update(id, input)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Delete a category
    ///
    /// Menu items referencing it are not cascaded at this layer; the foreign
    /// key constraint decides what the store allows.
    pub async fn delete_category(&self, id: i64) -> CategoryResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate::eq;

    fn request(name: &str) -> CategoryRequest {
        CategoryRequest {
            name: name.to_string(),
            display_order: 0,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_exists_by_name()
            .with(eq("Pho"))
            .returning(|_| Ok(true));

        let service = CategoryService::new(mock_repo);
        let result = service.create_category(request("Pho")).await;

        assert!(matches!(result, Err(CategoryError::DuplicateName(name)) if name == "Pho"));
    }

    #[tokio::test]
    async fn test_create_trims_name_before_uniqueness_check() {
        let mut mock_repo = MockCategoryRepository::new();
        // The repository must only ever see the trimmed name
        mock_repo
            .expect_exists_by_name()
            .with(eq("Pho"))
            .returning(|_| Ok(false));
        mock_repo.expect_insert().returning(|input| {
            Ok(Category {
                id: 1,
                name: input.name,
                display_order: input.display_order,
            })
        });

        let service = CategoryService::new(mock_repo);
        let category = service.create_category(request("  Pho  ")).await.unwrap();

        assert_eq!(category.name, "Pho");
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            display_order: 0,
        }
    }

    #[tokio::test]
    async fn test_update_to_own_name_is_not_a_conflict() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(category(id, "Drinks"))));
        mock_repo
            .expect_exists_by_name_excluding()
            .with(eq("Drinks"), eq(7))
            .returning(|_, _| Ok(false));
        mock_repo.expect_update().returning(|id, input| {
            Ok(Some(Category {
                id,
                name: input.name,
                display_order: input.display_order,
            }))
        });

        let service = CategoryService::new(mock_repo);
        let category = service.update_category(7, request("Drinks")).await.unwrap();

        assert_eq!(category.name, "Drinks");
    }

    #[tokio::test]
    async fn test_update_rejects_name_held_by_other_category() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(category(id, "Desserts"))));
        mock_repo
            .expect_exists_by_name_excluding()
            .with(eq("Drinks"), eq(7))
            .returning(|_, _| Ok(true));

        let service = CategoryService::new(mock_repo);
        let result = service.update_category(7, request("Drinks")).await;

        assert!(matches!(result, Err(CategoryError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(99))
            .returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.update_category(99, request("Ghost")).await;

        assert!(matches!(result, Err(CategoryError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_not_found_over_taken_name() {
        // No uniqueness expectation is set: resolving the id must come
        // first, and a missing id short-circuits before any name check.
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.update_category(999, request("Pho")).await;

        assert!(matches!(result, Err(CategoryError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_get_missing_category_is_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(5))
            .returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.get_category(5).await;

        assert!(matches!(result, Err(CategoryError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_delete_missing_category_is_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_delete().with(eq(9)).returning(|_| Ok(false));

        let service = CategoryService::new(mock_repo);
        let result = service.delete_category(9).await;

        assert!(matches!(result, Err(CategoryError::NotFound(9))));
    }
}
