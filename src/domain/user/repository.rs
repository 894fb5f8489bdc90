use async_trait::async_trait;

use super::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or overwrite a user by id.
    async fn save(&self, user: User) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// Exact-match lookup on the stored username field. Login goes through
    /// this; the case-insensitive comparison is only for duplicate checks.
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn list(&self) -> DomainResult<Vec<User>>;

    async fn delete(&self, id: &str) -> DomainResult<()>;
}
