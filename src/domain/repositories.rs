//! Unified repository access for the application layer.

use crate::domain::activity::ActivityLogRepository;
use crate::domain::cabin::CabinRepository;
use crate::domain::issue::IssueRepository;
use crate::domain::user::UserRepository;

/// One accessor per aggregate, so services depend on a single provider
/// instead of carrying four repository handles each.
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn cabins(&self) -> &dyn CabinRepository;
    fn issues(&self) -> &dyn IssueRepository;
    fn activity(&self) -> &dyn ActivityLogRepository;
}
