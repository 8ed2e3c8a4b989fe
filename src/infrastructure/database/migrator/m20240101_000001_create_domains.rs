//! Create domains table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Domains::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Domains::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Domains::Name)
                            .string()
                            .not_null()
                            .extra("COLLATE NOCASE"),
                    )
                    .col(ColumnDef::new(Domains::RootContentId).integer())
                    .col(ColumnDef::new(Domains::LanguageId).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_domains_name")
                    .table(Domains::Table)
                    .col(Domains::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Assigned-domain lookups filter on the content node
        manager
            .create_index(
                Index::create()
                    .name("idx_domains_root_content_id")
                    .table(Domains::Table)
                    .col(Domains::RootContentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Domains::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Domains {
    Table,
    Id,
    Name,
    RootContentId,
    LanguageId,
}
