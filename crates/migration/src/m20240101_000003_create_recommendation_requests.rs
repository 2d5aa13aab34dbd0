//! Create `recommendationrequests` table.
//!
//! Letters of recommendation requested from faculty.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecommendationRequests::Table)
                    .if_not_exists()
                    .col(big_integer(RecommendationRequests::Id).auto_increment().primary_key())
                    .col(string(RecommendationRequests::RequesterEmail))
                    .col(string(RecommendationRequests::ProfessorEmail))
                    .col(text(RecommendationRequests::Explanation))
                    .col(date_time(RecommendationRequests::DateRequested))
                    .col(date_time(RecommendationRequests::DateNeeded))
                    .col(boolean(RecommendationRequests::Done))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RecommendationRequests::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RecommendationRequests {
    #[sea_orm(iden = "recommendationrequests")]
    Table,
    Id,
    RequesterEmail,
    ProfessorEmail,
    Explanation,
    DateRequested,
    DateNeeded,
    Done,
}
