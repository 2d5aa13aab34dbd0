//! Create `helprequests` table.
//!
//! Help requests raised by student teams during lab sections.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HelpRequests::Table)
                    .if_not_exists()
                    .col(big_integer(HelpRequests::Id).auto_increment().primary_key())
                    .col(string(HelpRequests::RequesterEmail))
                    .col(string(HelpRequests::TeamId))
                    .col(string(HelpRequests::TableOrBreakoutRoom))
                    .col(date_time(HelpRequests::RequestTime))
                    .col(text(HelpRequests::Explanation))
                    .col(boolean(HelpRequests::Solved))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(HelpRequests::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HelpRequests {
    #[sea_orm(iden = "helprequests")]
    Table,
    Id,
    RequesterEmail,
    TeamId,
    TableOrBreakoutRoom,
    RequestTime,
    Explanation,
    Solved,
}
