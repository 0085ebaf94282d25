//! Create `product` table.
//!
//! Single catalog entity; `id` is assigned by the database. The price index
//! backs the range filter on listings.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const IDX_PRODUCT_PRICE: &str = "idx_product_price";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(text(Product::Name))
                    .col(text(Product::Description))
                    .col(double(Product::Price))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_PRICE)
                    .table(Product::Table)
                    .col(Product::Price)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    Description,
    Price,
    CreatedAt,
}
