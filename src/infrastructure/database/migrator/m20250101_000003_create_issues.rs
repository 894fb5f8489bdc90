//! Migration to create issues table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_cabins::Cabins;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Issues::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Issues::CabinId).string().not_null())
                    .col(ColumnDef::new(Issues::IssueType).string_len(20).not_null())
                    .col(ColumnDef::new(Issues::Description).text().not_null())
                    .col(ColumnDef::new(Issues::ReportedBy).string().not_null())
                    .col(
                        ColumnDef::new(Issues::ReportedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Issues::ResolvedBy).string().null())
                    .col(
                        ColumnDef::new(Issues::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issues_cabin")
                            .from(Issues::Table, Issues::CabinId)
                            .to(Cabins::Table, Cabins::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issues_cabin_id")
                    .table(Issues::Table)
                    .col(Issues::CabinId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Issues {
    Table,
    Id,
    CabinId,
    IssueType,
    Description,
    ReportedBy,
    ReportedAt,
    ResolvedBy,
    ResolvedAt,
}
