use async_trait::async_trait;

use super::Cabin;
use crate::domain::DomainResult;

#[async_trait]
pub trait CabinRepository: Send + Sync {
    /// Insert or overwrite a cabin by id.
    async fn save(&self, cabin: Cabin) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Cabin>>;

    async fn list(&self) -> DomainResult<Vec<Cabin>>;
}
