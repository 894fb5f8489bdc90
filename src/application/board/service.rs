//! Cabin state machine — the functional core of the board
//!
//! Encodes the physical workflow of a short-term rental operation: the
//! dirty→clean→occupied→dirty cycle, interrupted by issue reports that must
//! be cleared before the cycle resumes. Every operation checks the actor's
//! role before any mutation, enforces the From-state independently of
//! whatever the client believes (stale UI state is not trusted), and
//! commits the entity write together with exactly one activity log entry —
//! or fails with no partial effect.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::authorize::require_any;
use crate::domain::{
    actions, Cabin, CabinStatus, DomainError, DomainResult, Issue, IssueType, NewLogEntry,
    RepositoryProvider, Role, User,
};

pub struct BoardService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BoardService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_cabins(&self) -> DomainResult<Vec<Cabin>> {
        self.repos.cabins().list().await
    }

    pub async fn get_cabin(&self, id: &str) -> DomainResult<Cabin> {
        self.repos
            .cabins()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Cabin",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn list_issues(&self) -> DomainResult<Vec<Issue>> {
        self.repos.issues().list().await
    }

    // ── Workflow transitions ────────────────────────────────────

    /// EMPTY_CLEAN → OCCUPIED (reception).
    pub async fn check_in(
        &self,
        cabin_id: &str,
        guests: u32,
        nights: u32,
        actor: &User,
    ) -> DomainResult<Cabin> {
        require_any(actor, &[Role::Reception])?;
        if guests == 0 || nights == 0 {
            return Err(DomainError::InvalidInput(
                "guests and nights must be positive".into(),
            ));
        }

        let previous = self.get_cabin(cabin_id).await?;
        if previous.status != CabinStatus::EmptyClean {
            return Err(DomainError::InvalidTransition {
                from: previous.status.as_str(),
                action: "check_in",
            });
        }

        let mut cabin = previous.clone();
        cabin.status = CabinStatus::Occupied;

        let entry = NewLogEntry::record(
            actor,
            actions::CHECK_IN,
            format!("{} guests, {} nights", guests, nights),
        );
        self.commit_cabin(&previous, cabin, entry).await
    }

    /// OCCUPIED → EMPTY_DIRTY (reception).
    pub async fn check_out(&self, cabin_id: &str, actor: &User) -> DomainResult<Cabin> {
        require_any(actor, &[Role::Reception])?;

        let previous = self.get_cabin(cabin_id).await?;
        if previous.status != CabinStatus::Occupied {
            return Err(DomainError::InvalidTransition {
                from: previous.status.as_str(),
                action: "check_out",
            });
        }

        let mut cabin = previous.clone();
        cabin.status = CabinStatus::EmptyDirty;

        let entry = NewLogEntry::record(actor, actions::CHECK_OUT, "guest checked out");
        self.commit_cabin(&previous, cabin, entry).await
    }

    /// EMPTY_DIRTY → EMPTY_CLEAN (housekeeping).
    pub async fn cleaning_done(&self, cabin_id: &str, actor: &User) -> DomainResult<Cabin> {
        require_any(actor, &[Role::Housekeeping])?;

        let previous = self.get_cabin(cabin_id).await?;
        if previous.status != CabinStatus::EmptyDirty {
            return Err(DomainError::InvalidTransition {
                from: previous.status.as_str(),
                action: "cleaning_done",
            });
        }

        let mut cabin = previous.clone();
        cabin.status = CabinStatus::EmptyClean;

        let entry = NewLogEntry::record(actor, actions::CLEANING_DONE, "cleaning finished");
        self.commit_cabin(&previous, cabin, entry).await
    }

    // ── Issue interrupt ─────────────────────────────────────────

    /// Report a problem against a cabin from any state without an open
    /// issue. Any authenticated role may report; the role predicate is
    /// simply "actor exists".
    pub async fn report_issue(
        &self,
        cabin_id: &str,
        issue_type: IssueType,
        description: &str,
        actor: &User,
    ) -> DomainResult<Cabin> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::InvalidInput(
                "issue description must not be empty".into(),
            ));
        }

        let previous = self.get_cabin(cabin_id).await?;
        // One open issue per cabin, for every role including admin.
        if previous.has_open_issue() {
            return Err(DomainError::IssueAlreadyActive(previous.id.clone()));
        }

        let issue = Issue {
            id: uuid::Uuid::new_v4().to_string(),
            cabin_id: previous.id.clone(),
            issue_type,
            description: description.to_string(),
            reported_by: actor.id.clone(),
            reported_at: Utc::now(),
            resolved_by: None,
            resolved_at: None,
        };
        self.repos.issues().save(issue.clone()).await?;

        let mut cabin = previous.clone();
        cabin.status = match issue_type {
            IssueType::Technical => CabinStatus::IssueTech,
            IssueType::Cleaning => CabinStatus::IssueClean,
        };
        cabin.active_issue_id = Some(issue.id.clone());

        if let Err(e) = self.repos.cabins().save(cabin.clone()).await {
            self.repos.issues().delete(&issue.id).await.ok();
            return Err(e);
        }

        let entry = NewLogEntry::record(
            actor,
            actions::ISSUE_REPORTED,
            format!("{}: {}", issue_type, description),
        );
        if let Err(e) = self.repos.activity().append(entry).await {
            self.repos.cabins().save(previous).await.ok();
            self.repos.issues().delete(&issue.id).await.ok();
            return Err(e);
        }

        info!(cabin_id = %cabin.id, issue_id = %issue.id, "issue reported");
        Ok(cabin)
    }

    /// ISSUE_TECH → EMPTY_DIRTY (technical): resolves the referenced issue
    /// and clears the cabin's reference to it.
    pub async fn resolve_technical_issue(
        &self,
        cabin_id: &str,
        actor: &User,
    ) -> DomainResult<Cabin> {
        require_any(actor, &[Role::Technical])?;

        let previous = self.get_cabin(cabin_id).await?;
        let issue_id = match (&previous.status, &previous.active_issue_id) {
            (CabinStatus::IssueTech, Some(id)) => id.clone(),
            _ => {
                return Err(DomainError::InvalidTransition {
                    from: previous.status.as_str(),
                    action: "resolve_technical_issue",
                })
            }
        };

        let unresolved = self
            .repos
            .issues()
            .find_by_id(&issue_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Issue",
                field: "id",
                value: issue_id.clone(),
            })?;
        let issue = self.resolve_issue(&issue_id, actor).await?;

        let mut cabin = previous.clone();
        cabin.status = CabinStatus::EmptyDirty;
        cabin.active_issue_id = None;

        if let Err(e) = self.repos.cabins().save(cabin.clone()).await {
            self.repos.issues().save(unresolved).await.ok();
            return Err(e);
        }

        let entry = NewLogEntry::record(
            actor,
            actions::ISSUE_RESOLVED,
            format!("{}: {}", issue.issue_type, issue.description),
        );
        if let Err(e) = self.repos.activity().append(entry).await {
            self.repos.cabins().save(previous).await.ok();
            self.repos.issues().save(unresolved).await.ok();
            return Err(e);
        }

        info!(cabin_id = %cabin.id, issue_id = %issue.id, "technical issue resolved");
        Ok(cabin)
    }

    /// Tracker-level terminal mutation: stamp resolver and time on an open
    /// issue. Resolving twice signals `AlreadyResolved` rather than
    /// silently succeeding. The log entry for resolution is written by
    /// [`BoardService::resolve_technical_issue`], which is the only
    /// workflow path here.
    pub async fn resolve_issue(&self, issue_id: &str, actor: &User) -> DomainResult<Issue> {
        let mut issue = self
            .repos
            .issues()
            .find_by_id(issue_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Issue",
                field: "id",
                value: issue_id.to_string(),
            })?;

        if issue.is_resolved() {
            return Err(DomainError::AlreadyResolved(issue.id));
        }

        issue.resolved_by = Some(actor.id.clone());
        issue.resolved_at = Some(Utc::now());
        self.repos.issues().save(issue.clone()).await?;
        Ok(issue)
    }

    // ── Escape hatch ────────────────────────────────────────────

    /// Set any status directly, bypassing the transition table (admin).
    ///
    /// Exists because real operations occasionally need manual correction
    /// outside the modeled workflow. It never touches `active_issue_id`,
    /// even when that leaves the reference inconsistent with the new
    /// status, and is logged with its own action tag so audits can tell
    /// manual overrides apart from workflow-driven changes.
    pub async fn admin_override(
        &self,
        cabin_id: &str,
        new_status: CabinStatus,
        actor: &User,
    ) -> DomainResult<Cabin> {
        require_any(actor, &[Role::Admin])?;

        let previous = self.get_cabin(cabin_id).await?;
        let mut cabin = previous.clone();
        cabin.status = new_status;

        let entry = NewLogEntry::record(
            actor,
            actions::ADMIN_OVERRIDE,
            format!("status manually set to {}", new_status),
        );
        self.commit_cabin(&previous, cabin, entry).await
    }

    // ── Helpers ─────────────────────────────────────────────────

    /// Persist the updated cabin and its log entry as one logical
    /// transaction: a failed append rolls the cabin back to `previous`.
    async fn commit_cabin(
        &self,
        previous: &Cabin,
        updated: Cabin,
        entry: NewLogEntry,
    ) -> DomainResult<Cabin> {
        self.repos.cabins().save(updated.clone()).await?;
        if let Err(e) = self.repos.activity().append(entry).await {
            self.repos.cabins().save(previous.clone()).await.ok();
            return Err(e);
        }
        info!(cabin_id = %updated.id, status = %updated.status, "cabin updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityLogRepository, LogEntry};
    use crate::infrastructure::storage::InMemoryStore;
    use async_trait::async_trait;

    fn user(role: Role) -> User {
        User {
            id: format!("user-{}", role.as_str()),
            username: format!("{}-1", role.as_str()),
            password: "pw".into(),
            role,
            created_at: Utc::now(),
        }
    }

    fn cabin(id: &str, status: CabinStatus) -> Cabin {
        Cabin {
            id: id.into(),
            name: "Mountain".into(),
            icon: "Mountain".into(),
            status,
            active_issue_id: None,
        }
    }

    async fn harness(status: CabinStatus) -> (BoardService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        store.cabins().save(cabin("c1", status)).await.unwrap();
        (BoardService::new(store.clone()), store)
    }

    async fn log_entries(store: &InMemoryStore) -> Vec<LogEntry> {
        store.activity().list().await.unwrap()
    }

    #[tokio::test]
    async fn test_full_cycle_produces_three_ordered_log_entries() {
        let (svc, store) = harness(CabinStatus::EmptyClean).await;
        let reception = user(Role::Reception);
        let housekeeping = user(Role::Housekeeping);

        let c = svc.check_in("c1", 2, 3, &reception).await.unwrap();
        assert_eq!(c.status, CabinStatus::Occupied);

        let c = svc.check_out("c1", &reception).await.unwrap();
        assert_eq!(c.status, CabinStatus::EmptyDirty);

        let c = svc.cleaning_done("c1", &housekeeping).await.unwrap();
        assert_eq!(c.status, CabinStatus::EmptyClean);

        let logs = log_entries(&store).await;
        let tags: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
        assert_eq!(
            tags,
            vec![actions::CHECK_IN, actions::CHECK_OUT, actions::CLEANING_DONE]
        );
        assert_eq!(logs[0].details, "2 guests, 3 nights");
        assert_eq!(logs[0].user_id, reception.id);
    }

    #[tokio::test]
    async fn test_check_in_requires_empty_clean_regardless_of_role() {
        for role in [Role::Admin, Role::Reception] {
            let (svc, _) = harness(CabinStatus::Occupied).await;
            let err = svc.check_in("c1", 2, 1, &user(role)).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidTransition { .. }));
        }
    }

    #[tokio::test]
    async fn test_check_in_rejects_non_positive_inputs() {
        let (svc, store) = harness(CabinStatus::EmptyClean).await;
        let reception = user(Role::Reception);

        for (guests, nights) in [(0, 3), (2, 0)] {
            let err = svc
                .check_in("c1", guests, nights, &reception)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
        }
        assert!(log_entries(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_role_gating_per_transition() {
        let (svc, _) = harness(CabinStatus::EmptyClean).await;
        let err = svc
            .check_in("c1", 2, 1, &user(Role::Housekeeping))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));

        let (svc, _) = harness(CabinStatus::EmptyDirty).await;
        let err = svc
            .cleaning_done("c1", &user(Role::Reception))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));

        // Admin satisfies every predicate.
        let (svc, _) = harness(CabinStatus::EmptyDirty).await;
        svc.cleaning_done("c1", &user(Role::Admin)).await.unwrap();
    }

    #[tokio::test]
    async fn test_report_issue_sets_state_and_reference() {
        let (svc, store) = harness(CabinStatus::EmptyClean).await;
        let tech = user(Role::Technical);

        let c = svc
            .report_issue("c1", IssueType::Technical, "AC broken", &tech)
            .await
            .unwrap();
        assert_eq!(c.status, CabinStatus::IssueTech);
        assert!(c.active_issue_id.is_some());

        let issues = store.issues().list().await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].reported_by, tech.id);
        assert!(!issues[0].is_resolved());

        // Invariant: reference set iff status is an issue state.
        assert!(c.status.is_issue() && c.has_open_issue());

        // Second report before resolution is rejected, even for admin.
        let err = svc
            .report_issue("c1", IssueType::Cleaning, "dusty", &user(Role::Admin))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::IssueAlreadyActive(_)));
        assert_eq!(log_entries(&store).await.len(), 1);
    }

    #[tokio::test]
    async fn test_cleaning_issue_maps_to_issue_clean() {
        let (svc, _) = harness(CabinStatus::Occupied).await;
        let c = svc
            .report_issue("c1", IssueType::Cleaning, "spill in kitchen", &user(Role::Reception))
            .await
            .unwrap();
        assert_eq!(c.status, CabinStatus::IssueClean);
    }

    #[tokio::test]
    async fn test_report_issue_rejects_blank_description() {
        let (svc, _) = harness(CabinStatus::EmptyClean).await;
        let err = svc
            .report_issue("c1", IssueType::Technical, "   ", &user(Role::Technical))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_resolve_technical_issue_clears_reference() {
        let (svc, store) = harness(CabinStatus::EmptyClean).await;
        let tech = user(Role::Technical);

        svc.report_issue("c1", IssueType::Technical, "AC broken", &tech)
            .await
            .unwrap();
        let c = svc.resolve_technical_issue("c1", &tech).await.unwrap();
        assert_eq!(c.status, CabinStatus::EmptyDirty);
        assert!(c.active_issue_id.is_none());

        let issue = &store.issues().list().await.unwrap()[0];
        assert!(issue.is_resolved());
        assert_eq!(issue.resolved_by.as_deref(), Some(tech.id.as_str()));

        let logs = log_entries(&store).await;
        assert_eq!(logs.last().unwrap().action, actions::ISSUE_RESOLVED);
    }

    #[tokio::test]
    async fn test_resolve_requires_issue_tech_state() {
        let (svc, _) = harness(CabinStatus::EmptyDirty).await;
        let err = svc
            .resolve_technical_issue("c1", &user(Role::Technical))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_resolve_issue_twice_signals_already_resolved() {
        let (svc, store) = harness(CabinStatus::EmptyClean).await;
        let tech = user(Role::Technical);

        svc.report_issue("c1", IssueType::Technical, "leak", &tech)
            .await
            .unwrap();
        let issue_id = store.issues().list().await.unwrap()[0].id.clone();

        svc.resolve_issue(&issue_id, &tech).await.unwrap();
        let err = svc.resolve_issue(&issue_id, &tech).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyResolved(_)));

        let err = svc.resolve_issue("no-such-issue", &tech).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_admin_override_bypasses_rules_but_keeps_issue_reference() {
        let (svc, store) = harness(CabinStatus::EmptyClean).await;
        let admin = user(Role::Admin);

        svc.report_issue("c1", IssueType::Technical, "AC broken", &admin)
            .await
            .unwrap();
        let c = svc
            .admin_override("c1", CabinStatus::Occupied, &admin)
            .await
            .unwrap();

        // Intentional: override changes status without auto-clearing the
        // open issue reference.
        assert_eq!(c.status, CabinStatus::Occupied);
        assert!(c.active_issue_id.is_some());

        let logs = log_entries(&store).await;
        assert_eq!(logs.last().unwrap().action, actions::ADMIN_OVERRIDE);
    }

    #[tokio::test]
    async fn test_admin_override_is_admin_only() {
        let (svc, _) = harness(CabinStatus::EmptyClean).await;
        let err = svc
            .admin_override("c1", CabinStatus::Occupied, &user(Role::Reception))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_every_successful_mutation_logs_exactly_once() {
        let (svc, store) = harness(CabinStatus::EmptyClean).await;
        let admin = user(Role::Admin);

        svc.check_in("c1", 1, 1, &admin).await.unwrap();
        svc.check_out("c1", &admin).await.unwrap();
        svc.cleaning_done("c1", &admin).await.unwrap();
        svc.report_issue("c1", IssueType::Technical, "x", &admin)
            .await
            .unwrap();
        svc.resolve_technical_issue("c1", &admin).await.unwrap();
        svc.admin_override("c1", CabinStatus::EmptyClean, &admin)
            .await
            .unwrap();

        let logs = log_entries(&store).await;
        assert_eq!(logs.len(), 6);
        assert!(logs.iter().all(|l| l.user_id == admin.id));
        // Canonical order is the insertion sequence.
        assert!(logs.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_unknown_cabin_is_not_found() {
        let (svc, _) = harness(CabinStatus::EmptyClean).await;
        let err = svc
            .check_out("ghost", &user(Role::Reception))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    // A provider whose log store always fails, for atomicity checks.
    struct BrokenLog;

    #[async_trait]
    impl ActivityLogRepository for BrokenLog {
        async fn append(&self, _entry: crate::domain::NewLogEntry) -> DomainResult<LogEntry> {
            Err(DomainError::Storage("log store down".into()))
        }
        async fn list(&self) -> DomainResult<Vec<LogEntry>> {
            Ok(Vec::new())
        }
        async fn list_for_user(&self, _: &str, _: u64) -> DomainResult<Vec<LogEntry>> {
            Ok(Vec::new())
        }
    }

    struct BrokenLogProvider {
        inner: InMemoryStore,
        log: BrokenLog,
    }

    impl RepositoryProvider for BrokenLogProvider {
        fn users(&self) -> &dyn crate::domain::UserRepository {
            self.inner.users()
        }
        fn cabins(&self) -> &dyn crate::domain::CabinRepository {
            self.inner.cabins()
        }
        fn issues(&self) -> &dyn crate::domain::IssueRepository {
            self.inner.issues()
        }
        fn activity(&self) -> &dyn ActivityLogRepository {
            &self.log
        }
    }

    #[tokio::test]
    async fn test_failed_log_append_rolls_back_the_transition() {
        let provider = Arc::new(BrokenLogProvider {
            inner: InMemoryStore::new(),
            log: BrokenLog,
        });
        provider
            .inner
            .cabins()
            .save(cabin("c1", CabinStatus::EmptyClean))
            .await
            .unwrap();
        let svc = BoardService::new(provider.clone());

        let err = svc
            .check_in("c1", 2, 3, &user(Role::Reception))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));

        // State change is not committed without its log entry.
        let c = provider.inner.cabins().find_by_id("c1").await.unwrap().unwrap();
        assert_eq!(c.status, CabinStatus::EmptyClean);

        // Same for issue reports: neither the cabin nor the issue survives.
        let err = svc
            .report_issue("c1", IssueType::Technical, "leak", &user(Role::Technical))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        let c = provider.inner.cabins().find_by_id("c1").await.unwrap().unwrap();
        assert_eq!(c.status, CabinStatus::EmptyClean);
        assert!(c.active_issue_id.is_none());
        assert!(provider.inner.issues().list().await.unwrap().is_empty());
    }
}
