use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(TableStatus::Enum)
                    .values([
                        TableStatus::Available,
                        TableStatus::Occupied,
                        TableStatus::Reserved,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DiningTables::Table)
                    .if_not_exists()
                    .col(big_pk_auto(DiningTables::Id))
                    .col(string(DiningTables::Name))
                    .col(
                        ColumnDef::new(DiningTables::Status)
                            .enumeration(
                                TableStatus::Enum,
                                [
                                    TableStatus::Available,
                                    TableStatus::Occupied,
                                    TableStatus::Reserved,
                                ],
                            )
                            .not_null()
                            .default("available"),
                    )
                    .col(string_null(DiningTables::Location))
                    .col(integer_null(DiningTables::Seats))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiningTables::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(TableStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DiningTables {
    Table,
    Id,
    Name,
    Status,
    Location,
    Seats,
}

#[derive(DeriveIden)]
enum TableStatus {
    #[sea_orm(iden = "table_status")]
    Enum,
    #[sea_orm(iden = "available")]
    Available,
    #[sea_orm(iden = "occupied")]
    Occupied,
    #[sea_orm(iden = "reserved")]
    Reserved,
}
