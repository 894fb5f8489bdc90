use async_trait::async_trait;

use super::Issue;
use crate::domain::DomainResult;

#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Insert or overwrite an issue by id.
    async fn save(&self, issue: Issue) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Issue>>;

    async fn list(&self) -> DomainResult<Vec<Issue>>;

    /// Remove an issue record. Issues are a historical record and no
    /// business operation deletes them; this exists solely so a failed
    /// report can be rolled back before it is considered committed.
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
