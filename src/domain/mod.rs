//! Domain layer: entities, enums, errors and repository interfaces.

pub mod activity;
pub mod cabin;
pub mod error;
pub mod issue;
pub mod repositories;
pub mod user;

pub use activity::{actions, ActivityLogRepository, LogEntry, NewLogEntry};
pub use cabin::{Cabin, CabinRepository, CabinStatus};
pub use error::{DomainError, DomainResult};
pub use issue::{Issue, IssueRepository, IssueType};
pub use repositories::RepositoryProvider;
pub use user::{Role, User, UserPatch, UserRepository};
