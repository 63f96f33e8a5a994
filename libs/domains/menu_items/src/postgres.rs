use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{MenuItemError, MenuItemResult},
    models::{MenuItem, MenuItemFilter, MenuItemWrite},
    repository::MenuItemRepository,
};

/// PostgreSQL implementation of MenuItemRepository backed by Sea-ORM.
///
/// Reads join against the categories table to carry the category name into
/// the wire representation.
pub struct PgMenuItemRepository {
    db: DatabaseConnection,
}

impl PgMenuItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn category_name(&self, category_id: i64) -> MenuItemResult<String> {
        let category = domain_categories::entity::Entity::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(category.map(|c| c.name).unwrap_or_default())
    }
}

fn db_error(e: sea_orm::DbErr) -> MenuItemError {
    MenuItemError::Internal(format!("Database error: {}", e))
}

fn with_category(
    pair: (entity::Model, Option<domain_categories::entity::Model>),
) -> MenuItem {
    let (model, category) = pair;
    let category_name = category.map(|c| c.name).unwrap_or_default();
    model.into_menu_item(category_name)
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn find_by_filter(&self, filter: MenuItemFilter) -> MenuItemResult<Vec<MenuItem>> {
        let mut query = entity::Entity::find();

        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::Column::CategoryId.eq(category_id));
        }

        if let Some(available) = filter.available {
            query = query.filter(entity::Column::Available.eq(available));
        }

        if let Some(keyword) = filter.keyword {
            query = query.filter(
                Expr::col((entity::Entity, entity::Column::Name))
                    .ilike(format!("%{}%", keyword)),
            );
        }

        let pairs = query
            .order_by_asc(entity::Column::Id)
            .find_also_related(domain_categories::entity::Entity)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(pairs.into_iter().map(with_category).collect())
    }

    async fn find_by_id(&self, id: i64) -> MenuItemResult<Option<MenuItem>> {
        let pair = entity::Entity::find_by_id(id)
            .find_also_related(domain_categories::entity::Entity)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(pair.map(with_category))
    }

    async fn insert(&self, input: MenuItemWrite) -> MenuItemResult<MenuItem> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            category_id: Set(input.category_id),
            description: Set(input.description),
            available: Set(input.available),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        let category_name = self.category_name(model.category_id).await?;

        tracing::info!(menu_item_id = model.id, "Created menu item");
        Ok(model.into_menu_item(category_name))
    }

    async fn update(&self, id: i64, input: MenuItemWrite) -> MenuItemResult<Option<MenuItem>> {
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
            price: Set(input.price),
            category_id: Set(input.category_id),
            description: Set(input.description),
            available: Set(input.available),
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        let category_name = self.category_name(model.category_id).await?;

        tracing::info!(menu_item_id = id, "Updated menu item");
        Ok(Some(model.into_menu_item(category_name)))
    }

    async fn set_availability(
        &self,
        id: i64,
        available: bool,
    ) -> MenuItemResult<Option<MenuItem>> {
        let existing = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = existing.into();
        active_model.available = Set(available);

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        let category_name = self.category_name(model.category_id).await?;

        tracing::info!(menu_item_id = id, available, "Set menu item availability");
        Ok(Some(model.into_menu_item(category_name)))
    }

    async fn delete(&self, id: i64) -> MenuItemResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected > 0 {
            tracing::info!(menu_item_id = id, "Deleted menu item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
