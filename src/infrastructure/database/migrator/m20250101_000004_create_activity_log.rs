//! Migration to create activity_log table
//!
//! No foreign key to users: log entries reference users weakly and must
//! survive account deletion.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityLog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivityLog::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActivityLog::UserId).string().not_null())
                    .col(ColumnDef::new(ActivityLog::Username).string_len(50).not_null())
                    .col(ColumnDef::new(ActivityLog::Action).string_len(50).not_null())
                    .col(ColumnDef::new(ActivityLog::Details).text().not_null())
                    .col(
                        ColumnDef::new(ActivityLog::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_log_user_id")
                    .table(ActivityLog::Table)
                    .col(ActivityLog::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityLog {
    Table,
    Id,
    UserId,
    Username,
    Action,
    Details,
    Timestamp,
}
