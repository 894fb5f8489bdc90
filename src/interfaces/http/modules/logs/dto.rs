//! Activity log DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::LogEntry;

/// Log entry API representation
#[derive(Debug, Serialize, ToSchema)]
pub struct LogEntryDto {
    pub id: i64,
    pub user_id: String,
    /// Actor's name at the time of the action; a later rename or delete
    /// of the account does not change it
    pub username: String,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl From<LogEntry> for LogEntryDto {
    fn from(e: LogEntry) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            username: e.username,
            action: e.action,
            details: e.details,
            timestamp: e.timestamp,
        }
    }
}

/// Log search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct LogSearchParams {
    /// Case-insensitive substring matched against username, action and
    /// details. Empty or absent matches everything.
    #[serde(default)]
    pub search: String,
}

/// Own-activity query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentActivityParams {
    /// Maximum number of entries, most recent first
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}
