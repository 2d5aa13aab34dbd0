//! Create `articles` table.
//!
//! Links to write-ups shared by course staff.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(big_integer(Articles::Id).auto_increment().primary_key())
                    .col(string(Articles::Title))
                    .col(string_len(Articles::Url, 1024))
                    .col(text(Articles::Explanation))
                    .col(string(Articles::Email))
                    .col(date_time(Articles::DateAdded))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Articles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
    Title,
    Url,
    Explanation,
    Email,
    DateAdded,
}
