use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{CategoryError, CategoryResult},
    models::{Category, CategoryRequest},
    repository::CategoryRepository,
};

/// PostgreSQL implementation of CategoryRepository backed by Sea-ORM
pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> CategoryError {
    CategoryError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all_ordered(&self) -> CategoryResult<Vec<Category>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::DisplayOrder)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> CategoryResult<Option<Category>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(|m| m.into()))
    }

    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool> {
        let exists = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_error)?
            .is_some();

        Ok(exists)
    }

    async fn exists_by_name_excluding(&self, name: &str, id: i64) -> CategoryResult<bool> {
        let exists = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .filter(entity::Column::Id.ne(id))
            .one(&self.db)
            .await
            .map_err(db_error)?
            .is_some();

        Ok(exists)
    }

    async fn insert(&self, input: CategoryRequest) -> CategoryResult<Category> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            display_order: Set(input.display_order),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;

        tracing::info!(category_id = model.id, "Created category");
        Ok(model.into())
    }

    async fn update(&self, id: i64, input: CategoryRequest) -> CategoryResult<Option<Category>> {
        let existing = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        if existing.is_none() {
            return Ok(None);
        }

        let active_model = entity::ActiveModel {
            id: Set(id),
            name: Set(input.name),
            display_order: Set(input.display_order),
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;

        tracing::info!(category_id = id, "Updated category");
        Ok(Some(model.into()))
    }

    async fn delete(&self, id: i64) -> CategoryResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected > 0 {
            tracing::info!(category_id = id, "Deleted category");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
