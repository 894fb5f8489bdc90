//! SeaORM repositories

pub mod activity_log_repository;
pub mod cabin_repository;
pub mod issue_repository;
pub mod repository_provider;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

/// Map a database error into the domain's storage error kind.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}
