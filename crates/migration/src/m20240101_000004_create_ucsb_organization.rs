//! Create `ucsborganization` table.
//!
//! Keyed by the short organization code rather than a generated id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UcsbOrganization::Table)
                    .if_not_exists()
                    .col(string_len(UcsbOrganization::OrgCode, 32).primary_key())
                    .col(string(UcsbOrganization::OrgTranslationShort))
                    .col(string(UcsbOrganization::OrgTranslation))
                    .col(boolean(UcsbOrganization::Inactive))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UcsbOrganization::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UcsbOrganization {
    #[sea_orm(iden = "ucsborganization")]
    Table,
    OrgCode,
    OrgTranslationShort,
    OrgTranslation,
    Inactive,
}
