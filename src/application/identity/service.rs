//! User management service — application-layer orchestration
//!
//! All identity and account-management business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::authorize::require_any;
use crate::auth::jwt::{create_token, JwtConfig};
use crate::domain::{
    actions, DomainError, DomainResult, NewLogEntry, RepositoryProvider, Role, User, UserPatch,
};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Identity / user-management use-cases.
///
/// Account mutations are admin-only and each successful one appends exactly
/// one activity log entry attributed to the acting admin. When the log
/// append fails, the entity write is rolled back so the operation has no
/// partial effect.
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Exact-match credential check: the username lookup is against the
    /// stored field as-is (no case folding — that is only for duplicate
    /// checks) and the password compare is byte equality.
    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<User> {
        let user = self.repos.users().find_by_username(username).await?;
        match user {
            Some(user) if user.password == password => Ok(user),
            _ => Err(DomainError::InvalidCredentials),
        }
    }

    /// Authenticate and issue the session token a client keeps across
    /// restarts to rehydrate its identity.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResult> {
        let user = self.authenticate(username, password).await?;

        let token = create_token(&user.id, &user.username, user.role.as_str(), &self.jwt_config)
            .map_err(|e| DomainError::Storage(format!("failed to create token: {e}")))?;

        info!(user_id = %user.id, username = %user.username, "login");

        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repos.users().list().await
    }

    pub async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        self.repos.users().find_by_id(id).await
    }

    // ── Commands (admin-only mutations) ─────────────────────────

    pub async fn add_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
        actor: &User,
    ) -> DomainResult<User> {
        require_any(actor, &[Role::Admin])?;

        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::InvalidInput(
                "username and password must not be empty".into(),
            ));
        }
        self.ensure_username_free(username, None).await?;

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role,
            created_at: Utc::now(),
        };
        self.repos.users().save(user.clone()).await?;

        let entry = NewLogEntry::record(
            actor,
            actions::CREATE_USER,
            format!("created user '{}' with role {}", user.username, user.role),
        );
        if let Err(e) = self.repos.activity().append(entry).await {
            // Not committed without its log entry.
            self.repos.users().delete(&user.id).await.ok();
            return Err(e);
        }

        info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user)
    }

    pub async fn update_user(
        &self,
        id: &str,
        patch: UserPatch,
        actor: &User,
    ) -> DomainResult<User> {
        require_any(actor, &[Role::Admin])?;

        let previous = self
            .repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        let mut user = previous.clone();
        if let Some(username) = patch.username {
            let username = username.trim().to_string();
            if username.is_empty() {
                return Err(DomainError::InvalidInput("username must not be empty".into()));
            }
            self.ensure_username_free(&username, Some(id)).await?;
            user.username = username;
        }
        if let Some(password) = patch.password {
            if password.is_empty() {
                return Err(DomainError::InvalidInput("password must not be empty".into()));
            }
            user.password = password;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }

        self.repos.users().save(user.clone()).await?;

        let entry = NewLogEntry::record(
            actor,
            actions::UPDATE_USER,
            format!("updated user '{}'", user.username),
        );
        if let Err(e) = self.repos.activity().append(entry).await {
            self.repos.users().save(previous).await.ok();
            return Err(e);
        }

        info!(user_id = %user.id, "user updated");
        Ok(user)
    }

    pub async fn delete_user(&self, id: &str, actor: &User) -> DomainResult<()> {
        require_any(actor, &[Role::Admin])?;

        if id == actor.id {
            return Err(DomainError::CannotDeleteSelf);
        }

        let target = self
            .repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        self.repos.users().delete(id).await?;

        let entry = NewLogEntry::record(
            actor,
            actions::DELETE_USER,
            format!("deleted user '{}'", target.username),
        );
        if let Err(e) = self.repos.activity().append(entry).await {
            self.repos.users().save(target).await.ok();
            return Err(e);
        }

        info!(user_id = %id, "user deleted");
        Ok(())
    }

    // ── Helpers ─────────────────────────────────────────────────

    /// Case-insensitive uniqueness check against every user other than
    /// `exclude_id` (the account being edited, if any).
    async fn ensure_username_free(
        &self,
        username: &str,
        exclude_id: Option<&str>,
    ) -> DomainResult<()> {
        let candidate = username.to_lowercase();
        let users = self.repos.users().list().await?;
        let taken = users.iter().any(|u| {
            exclude_id != Some(u.id.as_str()) && u.username.to_lowercase() == candidate
        });
        if taken {
            return Err(DomainError::DuplicateUsername(username.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStore;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".into(),
            expiration_hours: 1,
            issuer: "cabin-board-test".into(),
        }
    }

    async fn harness() -> (UserService, Arc<InMemoryStore>, User) {
        let store = Arc::new(InMemoryStore::new());
        let admin = User {
            id: "admin-1".into(),
            username: "boss".into(),
            password: "s3cret".into(),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        store.users().save(admin.clone()).await.unwrap();
        (UserService::new(store.clone(), jwt()), store, admin)
    }

    #[tokio::test]
    async fn test_login_is_exact_match_on_both_fields() {
        let (svc, _, _) = harness().await;

        let result = svc.login("boss", "s3cret").await.unwrap();
        assert_eq!(result.user.username, "boss");
        assert_eq!(result.token_type, "Bearer");
        assert!(!result.token.is_empty());

        // Wrong password, unknown user, and case-folded username all fail
        // the same way.
        for (u, p) in [("boss", "wrong"), ("nobody", "s3cret"), ("BOSS", "s3cret")] {
            let err = svc.login(u, p).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidCredentials));
        }
    }

    #[tokio::test]
    async fn test_add_user_is_admin_only_and_logged() {
        let (svc, store, admin) = harness().await;

        let user = svc
            .add_user("sara", "pw1", Role::Reception, &admin)
            .await
            .unwrap();
        assert_eq!(user.role, Role::Reception);

        let logs = store.activity().list().await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].action, actions::CREATE_USER);
        assert_eq!(logs[0].user_id, admin.id);
        assert_eq!(logs[0].username, admin.username);

        let err = svc
            .add_user("omid", "pw2", Role::Technical, &user)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_duplicate_username_is_case_insensitive() {
        let (svc, _, admin) = harness().await;
        svc.add_user("sara", "pw", Role::Reception, &admin)
            .await
            .unwrap();

        let err = svc
            .add_user("SARA", "pw", Role::Technical, &admin)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateUsername(_)));
    }

    #[tokio::test]
    async fn test_update_user_skips_self_in_duplicate_check() {
        let (svc, _, admin) = harness().await;
        let sara = svc
            .add_user("sara", "pw", Role::Reception, &admin)
            .await
            .unwrap();

        // Re-saving the same username on the same account is fine.
        let patch = UserPatch {
            username: Some("Sara".into()),
            ..Default::default()
        };
        let updated = svc.update_user(&sara.id, patch, &admin).await.unwrap();
        assert_eq!(updated.username, "Sara");

        // Taking another account's name is not.
        let patch = UserPatch {
            username: Some("boss".into()),
            ..Default::default()
        };
        let err = svc.update_user(&sara.id, patch, &admin).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateUsername(_)));
    }

    #[tokio::test]
    async fn test_delete_self_is_rejected() {
        let (svc, _, admin) = harness().await;
        let err = svc.delete_user(&admin.id, &admin).await.unwrap_err();
        assert!(matches!(err, DomainError::CannotDeleteSelf));
    }

    #[tokio::test]
    async fn test_delete_user_removes_account_and_logs() {
        let (svc, store, admin) = harness().await;
        let sara = svc
            .add_user("sara", "pw", Role::Reception, &admin)
            .await
            .unwrap();

        svc.delete_user(&sara.id, &admin).await.unwrap();
        assert!(svc.get_user_by_id(&sara.id).await.unwrap().is_none());

        let logs = store.activity().list().await.unwrap();
        assert_eq!(logs.last().unwrap().action, actions::DELETE_USER);

        let err = svc.delete_user(&sara.id, &admin).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_log_username_snapshot_survives_rename_and_delete() {
        let (svc, store, admin) = harness().await;
        let sara = svc
            .add_user("sara", "pw", Role::Reception, &admin)
            .await
            .unwrap();

        // Log something attributed to the account's current name.
        store
            .activity()
            .append(NewLogEntry::record(&sara, actions::CHECK_IN, "1 guests, 1 nights"))
            .await
            .unwrap();

        let patch = UserPatch {
            username: Some("sara_renamed".into()),
            ..Default::default()
        };
        svc.update_user(&sara.id, patch, &admin).await.unwrap();
        svc.delete_user(&sara.id, &admin).await.unwrap();

        let logs = store.activity().list().await.unwrap();
        let entry = logs.iter().find(|l| l.action == actions::CHECK_IN).unwrap();
        assert_eq!(entry.username, "sara");
    }
}
