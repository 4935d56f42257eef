//! Create `stock` table.
//! One row per stock-keeping entry; every column but `id` and `quantity` is nullable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stock::Table)
                    .if_not_exists()
                    .col(pk_auto(Stock::Id))
                    .col(string_len_null(Stock::Name, 256))
                    .col(string_len_null(Stock::UnitOfMeasure, 64))
                    .col(decimal_len_null(Stock::ValueOfMeasure, 16, 4))
                    .col(integer(Stock::Quantity).default(0))
                    .col(date_null(Stock::ExpiryDate))
                    .col(text_null(Stock::Comment))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stock_name")
                    .table(Stock::Table)
                    .col(Stock::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Stock::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Stock {
    Table,
    Id,
    Name,
    UnitOfMeasure,
    ValueOfMeasure,
    Quantity,
    ExpiryDate,
    Comment,
}
