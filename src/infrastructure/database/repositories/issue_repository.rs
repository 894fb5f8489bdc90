use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::db_err;
use crate::domain::{DomainResult, Issue, IssueRepository, IssueType};
use crate::infrastructure::database::entities::issue;

pub struct SeaOrmIssueRepository {
    db: DatabaseConnection,
}

impl SeaOrmIssueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_type_to_domain(t: issue::IssueType) -> IssueType {
    match t {
        issue::IssueType::Technical => IssueType::Technical,
        issue::IssueType::Cleaning => IssueType::Cleaning,
    }
}

fn domain_type_to_entity(t: IssueType) -> issue::IssueType {
    match t {
        IssueType::Technical => issue::IssueType::Technical,
        IssueType::Cleaning => issue::IssueType::Cleaning,
    }
}

fn model_to_domain(model: issue::Model) -> Issue {
    Issue {
        id: model.id,
        cabin_id: model.cabin_id,
        issue_type: entity_type_to_domain(model.issue_type),
        description: model.description,
        reported_by: model.reported_by,
        reported_at: model.reported_at,
        resolved_by: model.resolved_by,
        resolved_at: model.resolved_at,
    }
}

fn to_active_model(i: &Issue) -> issue::ActiveModel {
    issue::ActiveModel {
        id: Set(i.id.clone()),
        cabin_id: Set(i.cabin_id.clone()),
        issue_type: Set(domain_type_to_entity(i.issue_type)),
        description: Set(i.description.clone()),
        reported_by: Set(i.reported_by.clone()),
        reported_at: Set(i.reported_at),
        resolved_by: Set(i.resolved_by.clone()),
        resolved_at: Set(i.resolved_at),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl IssueRepository for SeaOrmIssueRepository {
    async fn save(&self, i: Issue) -> DomainResult<()> {
        let existing = issue::Entity::find_by_id(&i.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let model = to_active_model(&i);
        if existing.is_some() {
            model.update(&self.db).await.map_err(db_err)?;
        } else {
            model.insert(&self.db).await.map_err(db_err)?;
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Issue>> {
        let found = issue::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(model_to_domain))
    }

    async fn list(&self) -> DomainResult<Vec<Issue>> {
        let models = issue::Entity::find()
            .order_by_asc(issue::Column::ReportedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        issue::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
