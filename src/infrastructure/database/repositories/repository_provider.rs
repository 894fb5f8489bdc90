//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    ActivityLogRepository, CabinRepository, IssueRepository, RepositoryProvider, UserRepository,
};

use super::activity_log_repository::SeaOrmActivityLogRepository;
use super::cabin_repository::SeaOrmCabinRepository;
use super::issue_repository::SeaOrmIssueRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository
/// accessors.
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    cabins: SeaOrmCabinRepository,
    issues: SeaOrmIssueRepository,
    activity: SeaOrmActivityLogRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            cabins: SeaOrmCabinRepository::new(db.clone()),
            issues: SeaOrmIssueRepository::new(db.clone()),
            activity: SeaOrmActivityLogRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn cabins(&self) -> &dyn CabinRepository {
        &self.cabins
    }

    fn issues(&self) -> &dyn IssueRepository {
        &self.issues
    }

    fn activity(&self) -> &dyn ActivityLogRepository {
        &self.activity
    }
}
