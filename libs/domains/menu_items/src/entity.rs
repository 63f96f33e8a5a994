use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the menu_items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub category_id: i64,
    pub description: Option<String>,
    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "domain_categories::entity::Entity",
        from = "Column::CategoryId",
        to = "domain_categories::entity::Column::Id"
    )]
    Category,
}

impl Related<domain_categories::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Combine the row with its resolved category name into the wire-facing
    /// representation.
    pub fn into_menu_item(self, category_name: String) -> crate::models::MenuItem {
        crate::models::MenuItem {
            id: self.id,
            name: self.name,
            price: self.price,
            category_id: self.category_id,
            category_name,
            description: self.description,
            available: self.available,
        }
    }
}
