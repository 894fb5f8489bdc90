use chrono::{DateTime, Utc};

/// Staff role
///
/// Closed set: the board has exactly these four roles. `Admin` additionally
/// satisfies every role predicate in the cabin state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Reception,
    Housekeeping,
    Technical,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Reception => "reception",
            Self::Housekeeping => "housekeeping",
            Self::Technical => "technical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "reception" => Some(Self::Reception),
            "housekeeping" => Some(Self::Housekeeping),
            "technical" => Some(Self::Technical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff account
///
/// `password` is stored and compared as plaintext to preserve the login
/// contract of the system this replaces (exact match on both fields).
/// Known defect; see DESIGN.md before deploying anywhere real.
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Admin edit of an existing account. Absent fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            Role::Admin,
            Role::Reception,
            Role::Housekeeping,
            Role::Technical,
        ] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("RECEPTION"), Some(Role::Reception));
        assert_eq!(Role::parse("manager"), None);
    }
}
