use chrono::{DateTime, Utc};

/// Kind of problem reported against a cabin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    Technical,
    Cleaning,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Cleaning => "cleaning",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "technical" => Some(Self::Technical),
            "cleaning" => Some(Self::Cleaning),
            _ => None,
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problem report attached to a cabin.
///
/// Created open, resolved exactly once, never deleted — resolved issues
/// persist as a historical record after the owning cabin drops its
/// `active_issue_id` reference.
#[derive(Clone, Debug)]
pub struct Issue {
    pub id: String,
    pub cabin_id: String,
    pub issue_type: IssueType,
    pub description: String,
    pub reported_by: String,
    pub reported_at: DateTime<Utc>,
    pub resolved_by: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Issue {
    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }
}
