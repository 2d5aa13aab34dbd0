//! Create `menuitemreviews` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItemReviews::Table)
                    .if_not_exists()
                    .col(big_integer(MenuItemReviews::Id).auto_increment().primary_key())
                    .col(big_integer(MenuItemReviews::ItemId))
                    .col(string(MenuItemReviews::ReviewerEmail))
                    .col(integer(MenuItemReviews::Stars))
                    .col(date_time(MenuItemReviews::DateReviewed))
                    .col(text(MenuItemReviews::Comments))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuItemReviews::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuItemReviews {
    #[sea_orm(iden = "menuitemreviews")]
    Table,
    Id,
    ItemId,
    ReviewerEmail,
    Stars,
    DateReviewed,
    Comments,
}
