//! Create `ucsbdiningcommonsmenuitems` table.
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
                    .col(big_integer(MenuItems::Id).auto_increment().primary_key())
                    .col(string_len(MenuItems::DiningCommonsCode, 32))
                    .col(string(MenuItems::Name))
                    .col(string(MenuItems::Station))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuItems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuItems {
    #[sea_orm(iden = "ucsbdiningcommonsmenuitems")]
    Table,
    Id,
    DiningCommonsCode,
    Name,
    Station,
}
