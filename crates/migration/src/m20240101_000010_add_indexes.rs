use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reviews are usually browsed per menu item
        manager
            .create_index(
                Index::create()
                    .name("idx_menuitemreviews_item")
                    .table(MenuItemReviews::Table)
                    .col(MenuItemReviews::ItemId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menuitems_dining_commons")
                    .table(MenuItems::Table)
                    .col(MenuItems::DiningCommonsCode)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_email")
                    .table(Articles::Table)
                    .col(Articles::Email)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_articles_email").table(Articles::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_menuitems_dining_commons").table(MenuItems::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_menuitemreviews_item").table(MenuItemReviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MenuItemReviews {
    #[sea_orm(iden = "menuitemreviews")]
    Table,
    ItemId,
}

#[derive(DeriveIden)]
enum MenuItems {
    #[sea_orm(iden = "ucsbdiningcommonsmenuitems")]
    Table,
    DiningCommonsCode,
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Email,
}
