//! Cabin DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Cabin;

/// Cabin API representation
#[derive(Debug, Serialize, ToSchema)]
pub struct CabinDto {
    pub id: String,
    pub name: String,
    /// Display-only symbolic icon name; carries no business meaning
    pub icon: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_issue_id: Option<String>,
}

impl From<Cabin> for CabinDto {
    fn from(c: Cabin) -> Self {
        Self {
            id: c.id,
            name: c.name,
            icon: c.icon,
            status: c.status.to_string(),
            active_issue_id: c.active_issue_id,
        }
    }
}

/// Check-in request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckInRequest {
    #[validate(range(min = 1, message = "guests must be positive"))]
    pub guests: u32,
    #[validate(range(min = 1, message = "nights must be positive"))]
    pub nights: u32,
}

/// Issue report request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReportIssueRequest {
    /// One of: technical, cleaning
    pub issue_type: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

/// Manual status override request (admin)
#[derive(Debug, Deserialize, ToSchema)]
pub struct OverrideStatusRequest {
    /// One of: empty_clean, empty_dirty, occupied, issue_tech, issue_clean
    pub status: String,
}
