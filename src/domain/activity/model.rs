use chrono::{DateTime, Utc};

use crate::domain::User;

/// Machine tags for log entries, one per mutating operation.
pub mod actions {
    pub const CHECK_IN: &str = "check_in";
    pub const CHECK_OUT: &str = "check_out";
    pub const CLEANING_DONE: &str = "cleaning_done";
    pub const ISSUE_REPORTED: &str = "issue_reported";
    pub const ISSUE_RESOLVED: &str = "issue_resolved";
    pub const ADMIN_OVERRIDE: &str = "admin_override";
    pub const CREATE_USER: &str = "create_user";
    pub const UPDATE_USER: &str = "update_user";
    pub const DELETE_USER: &str = "delete_user";
}

/// Committed activity log entry.
///
/// `id` is the insertion sequence number assigned by the store and is the
/// canonical ordering of the log — ties are broken by sequence, never by
/// wall-clock precision. `username` is a snapshot of the actor's name at
/// the time of the action and must not change retroactively if the user is
/// later renamed or deleted.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// Log entry as handed to the store, before a sequence number exists.
#[derive(Clone, Debug)]
pub struct NewLogEntry {
    pub user_id: String,
    pub username: String,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl NewLogEntry {
    /// Build an entry attributed to `actor`, stamped with the current time.
    pub fn record(actor: &User, action: &str, details: impl Into<String>) -> Self {
        Self {
            user_id: actor.id.clone(),
            username: actor.username.clone(),
            action: action.to_string(),
            details: details.into(),
            timestamp: Utc::now(),
        }
    }
}
