/// Cabin occupancy/cleanliness/issue state
///
/// The normal workflow is the dirty→clean→occupied→dirty cycle; the two
/// ISSUE_* states interrupt it and must be cleared before the cycle resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinStatus {
    EmptyClean,
    EmptyDirty,
    Occupied,
    IssueTech,
    IssueClean,
}

impl CabinStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyClean => "empty_clean",
            Self::EmptyDirty => "empty_dirty",
            Self::Occupied => "occupied",
            Self::IssueTech => "issue_tech",
            Self::IssueClean => "issue_clean",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty_clean" => Some(Self::EmptyClean),
            "empty_dirty" => Some(Self::EmptyDirty),
            "occupied" => Some(Self::Occupied),
            "issue_tech" => Some(Self::IssueTech),
            "issue_clean" => Some(Self::IssueClean),
            _ => None,
        }
    }

    /// Whether this is one of the issue interrupt states.
    pub fn is_issue(&self) -> bool {
        matches!(self, Self::IssueTech | Self::IssueClean)
    }
}

impl std::fmt::Display for CabinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rentable unit tracked by the board.
///
/// Invariant (enforced by the state machine, not the struct): outside of
/// `admin_override`, `active_issue_id` is set iff `status.is_issue()`, and
/// a cabin has at most one open issue at a time. `icon` is a display-only
/// symbolic name and never influences core logic.
#[derive(Clone, Debug)]
pub struct Cabin {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub status: CabinStatus,
    pub active_issue_id: Option<String>,
}

impl Cabin {
    pub fn has_open_issue(&self) -> bool {
        self.active_issue_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            CabinStatus::EmptyClean,
            CabinStatus::EmptyDirty,
            CabinStatus::Occupied,
            CabinStatus::IssueTech,
            CabinStatus::IssueClean,
        ] {
            assert_eq!(CabinStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CabinStatus::parse("demolished"), None);
    }

    #[test]
    fn test_issue_states() {
        assert!(CabinStatus::IssueTech.is_issue());
        assert!(CabinStatus::IssueClean.is_issue());
        assert!(!CabinStatus::EmptyClean.is_issue());
        assert!(!CabinStatus::Occupied.is_issue());
    }
}
