use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set};

use super::db_err;
use crate::domain::{DomainResult, Role, User, UserRepository};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::Role) -> Role {
    match role {
        user::Role::Admin => Role::Admin,
        user::Role::Reception => Role::Reception,
        user::Role::Housekeeping => Role::Housekeeping,
        user::Role::Technical => Role::Technical,
    }
}

fn domain_role_to_entity(role: Role) -> user::Role {
    match role {
        Role::Admin => user::Role::Admin,
        Role::Reception => user::Role::Reception,
        Role::Housekeeping => user::Role::Housekeeping,
        Role::Technical => user::Role::Technical,
    }
}

fn model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password: model.password,
        role: entity_role_to_domain(model.role),
        created_at: model.created_at,
    }
}

fn to_active_model(u: &User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(u.id.clone()),
        username: Set(u.username.clone()),
        password: Set(u.password.clone()),
        role: Set(domain_role_to_entity(u.role)),
        created_at: Set(u.created_at),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, u: User) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(&u.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let model = to_active_model(&u);
        if existing.is_some() {
            model.update(&self.db).await.map_err(db_err)?;
        } else {
            model.insert(&self.db).await.map_err(db_err)?;
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let found = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let found = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        // SQLite string compares are byte-exact here, but re-check so the
        // login contract does not depend on column collation.
        Ok(found.filter(|m| m.username == username).map(model_to_domain))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
