use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::db_err;
use crate::domain::{Cabin, CabinRepository, CabinStatus, DomainResult};
use crate::infrastructure::database::entities::cabin;

pub struct SeaOrmCabinRepository {
    db: DatabaseConnection,
}

impl SeaOrmCabinRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_status_to_domain(status: cabin::CabinStatus) -> CabinStatus {
    match status {
        cabin::CabinStatus::EmptyClean => CabinStatus::EmptyClean,
        cabin::CabinStatus::EmptyDirty => CabinStatus::EmptyDirty,
        cabin::CabinStatus::Occupied => CabinStatus::Occupied,
        cabin::CabinStatus::IssueTech => CabinStatus::IssueTech,
        cabin::CabinStatus::IssueClean => CabinStatus::IssueClean,
    }
}

fn domain_status_to_entity(status: CabinStatus) -> cabin::CabinStatus {
    match status {
        CabinStatus::EmptyClean => cabin::CabinStatus::EmptyClean,
        CabinStatus::EmptyDirty => cabin::CabinStatus::EmptyDirty,
        CabinStatus::Occupied => cabin::CabinStatus::Occupied,
        CabinStatus::IssueTech => cabin::CabinStatus::IssueTech,
        CabinStatus::IssueClean => cabin::CabinStatus::IssueClean,
    }
}

fn model_to_domain(model: cabin::Model) -> Cabin {
    Cabin {
        id: model.id,
        name: model.name,
        icon: model.icon,
        status: entity_status_to_domain(model.status),
        active_issue_id: model.active_issue_id,
    }
}

fn to_active_model(c: &Cabin) -> cabin::ActiveModel {
    cabin::ActiveModel {
        id: Set(c.id.clone()),
        name: Set(c.name.clone()),
        icon: Set(c.icon.clone()),
        status: Set(domain_status_to_entity(c.status)),
        active_issue_id: Set(c.active_issue_id.clone()),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl CabinRepository for SeaOrmCabinRepository {
    async fn save(&self, c: Cabin) -> DomainResult<()> {
        let existing = cabin::Entity::find_by_id(&c.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let model = to_active_model(&c);
        if existing.is_some() {
            model.update(&self.db).await.map_err(db_err)?;
        } else {
            model.insert(&self.db).await.map_err(db_err)?;
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Cabin>> {
        let found = cabin::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(model_to_domain))
    }

    async fn list(&self) -> DomainResult<Vec<Cabin>> {
        let models = cabin::Entity::find()
            .order_by_asc(cabin::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
