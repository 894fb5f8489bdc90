use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set};

use super::db_err;
use crate::domain::{ActivityLogRepository, DomainResult, LogEntry, NewLogEntry};
use crate::infrastructure::database::entities::log_entry;

pub struct SeaOrmActivityLogRepository {
    db: DatabaseConnection,
}

impl SeaOrmActivityLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: log_entry::Model) -> LogEntry {
    LogEntry {
        id: model.id,
        user_id: model.user_id,
        username: model.username,
        action: model.action,
        details: model.details,
        timestamp: model.timestamp,
    }
}

#[async_trait]
impl ActivityLogRepository for SeaOrmActivityLogRepository {
    async fn append(&self, entry: NewLogEntry) -> DomainResult<LogEntry> {
        let model = log_entry::ActiveModel {
            id: NotSet, // sequence assigned by the database
            user_id: Set(entry.user_id),
            username: Set(entry.username),
            action: Set(entry.action),
            details: Set(entry.details),
            timestamp: Set(entry.timestamp),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn list(&self) -> DomainResult<Vec<LogEntry>> {
        let models = log_entry::Entity::find()
            .order_by_asc(log_entry::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list_for_user(&self, user_id: &str, limit: u64) -> DomainResult<Vec<LogEntry>> {
        let models = log_entry::Entity::find()
            .filter(log_entry::Column::UserId.eq(user_id))
            .order_by_desc(log_entry::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
