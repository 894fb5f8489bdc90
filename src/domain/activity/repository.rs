use async_trait::async_trait;

use super::{LogEntry, NewLogEntry};
use crate::domain::DomainResult;

/// Append-only store for the activity log.
///
/// There is deliberately no update or delete: the log is write-once per
/// entry and entries outlive the users and cabins they reference.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Append one entry, assigning the next sequence number.
    async fn append(&self, entry: NewLogEntry) -> DomainResult<LogEntry>;

    /// All entries in log order (ascending sequence).
    async fn list(&self) -> DomainResult<Vec<LogEntry>>;

    /// Entries for one user, most recent first, truncated to `limit`.
    async fn list_for_user(&self, user_id: &str, limit: u64) -> DomainResult<Vec<LogEntry>>;
}
