use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItems::Table)
                    .if_not_exists()
                    .col(big_pk_auto(MenuItems::Id))
                    .col(string_len(MenuItems::Name, 100))
                    .col(big_integer(MenuItems::Price))
                    .col(big_integer(MenuItems::CategoryId))
                    .col(string_len_null(MenuItems::Description, 255))
                    .col(boolean(MenuItems::Available).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_items_category_id")
                            .from(MenuItems::Table, MenuItems::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_items_category_id")
                    .table(MenuItems::Table)
                    .col(MenuItems::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_items_available")
                    .table(MenuItems::Table)
                    .col(MenuItems::Available)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItems::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MenuItems {
    Table,
    Id,
    Name,
    Price,
    CategoryId,
    Description,
    Available,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}
