//! Role-gated authorization
//!
//! Pure predicates consumed by every service operation before any mutation.
//! The original system sprinkled these checks through UI rendering; here
//! they are a single chokepoint independent of any rendering concern.

use crate::domain::{DomainError, DomainResult, Role, User};

/// Plain membership test: `user.role ∈ roles`.
pub fn has_role(user: &User, roles: &[Role]) -> bool {
    roles.contains(&user.role)
}

/// Reject unless the actor holds one of `roles`. Admin satisfies every
/// predicate, in addition to the named roles.
pub fn require_any(actor: &User, roles: &[Role]) -> DomainResult<()> {
    if actor.role == Role::Admin || has_role(actor, roles) {
        return Ok(());
    }
    Err(DomainError::Unauthorized(format!(
        "role '{}' may not perform this action",
        actor.role
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            username: "test".into(),
            password: "pw".into(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_has_role_is_plain_membership() {
        assert!(has_role(&user(Role::Reception), &[Role::Reception]));
        assert!(!has_role(&user(Role::Admin), &[Role::Reception]));
    }

    #[test]
    fn test_admin_satisfies_every_predicate() {
        assert!(require_any(&user(Role::Admin), &[Role::Reception]).is_ok());
        assert!(require_any(&user(Role::Admin), &[Role::Technical]).is_ok());
        assert!(require_any(&user(Role::Admin), &[Role::Admin]).is_ok());
    }

    #[test]
    fn test_other_roles_are_rejected() {
        let err = require_any(&user(Role::Housekeeping), &[Role::Reception]).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }
}
