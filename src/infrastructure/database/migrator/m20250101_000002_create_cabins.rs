//! Migration to create cabins table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cabins::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cabins::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Cabins::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Cabins::Icon).string_len(50).not_null())
                    .col(ColumnDef::new(Cabins::Status).string_len(20).not_null())
                    .col(ColumnDef::new(Cabins::ActiveIssueId).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cabins_status")
                    .table(Cabins::Table)
                    .col(Cabins::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cabins::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cabins {
    Table,
    Id,
    Name,
    Icon,
    Status,
    ActiveIssueId,
}
