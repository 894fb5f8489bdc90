//! Issue DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Issue;

/// Issue API representation
#[derive(Debug, Serialize, ToSchema)]
pub struct IssueDto {
    pub id: String,
    pub cabin_id: String,
    pub issue_type: String,
    pub description: String,
    pub reported_by: String,
    pub reported_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved: bool,
}

impl From<Issue> for IssueDto {
    fn from(i: Issue) -> Self {
        let resolved = i.is_resolved();
        Self {
            id: i.id,
            cabin_id: i.cabin_id,
            issue_type: i.issue_type.to_string(),
            description: i.description,
            reported_by: i.reported_by,
            reported_at: i.reported_at,
            resolved_by: i.resolved_by,
            resolved_at: i.resolved_at,
            resolved,
        }
    }
}
