pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_categories;
mod m20250601_000002_create_menu_items;
mod m20250601_000003_create_dining_tables;
mod m20250601_000004_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_categories::Migration),
            Box::new(m20250601_000002_create_menu_items::Migration),
            Box::new(m20250601_000003_create_dining_tables::Migration),
            Box::new(m20250601_000004_create_orders::Migration),
        ]
    }
}
