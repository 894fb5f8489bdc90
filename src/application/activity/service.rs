//! Activity log queries
//!
//! Read side of the audit trail. Writes happen inside the mutating
//! operations of the identity and board services, one entry per success.

use std::sync::Arc;

use crate::domain::{DomainResult, LogEntry, RepositoryProvider};

pub struct ActivityService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ActivityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Case-insensitive substring match against username, action and
    /// details (OR across the three), in log order. Recomputed on every
    /// call — no cursor state is retained. An empty filter matches all.
    pub async fn search(&self, filter: &str) -> DomainResult<Vec<LogEntry>> {
        let entries = self.repos.activity().list().await?;
        if filter.is_empty() {
            return Ok(entries);
        }
        let needle = filter.to_lowercase();
        Ok(entries
            .into_iter()
            .filter(|e| {
                e.username.to_lowercase().contains(&needle)
                    || e.action.to_lowercase().contains(&needle)
                    || e.details.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// One user's entries, most recent first, truncated to `limit`.
    pub async fn recent_for_user(&self, user_id: &str, limit: u64) -> DomainResult<Vec<LogEntry>> {
        self.repos.activity().list_for_user(user_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewLogEntry, Role, User};
    use crate::infrastructure::storage::InMemoryStore;
    use chrono::Utc;

    fn actor(id: &str, username: &str) -> User {
        User {
            id: id.into(),
            username: username.into(),
            password: "pw".into(),
            role: Role::Reception,
            created_at: Utc::now(),
        }
    }

    async fn seeded() -> (ActivityService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let sara = actor("u1", "sara");
        let omid = actor("u2", "omid");
        for (who, action, details) in [
            (&sara, "check_in", "2 guests, 3 nights"),
            (&omid, "issue_reported", "technical: AC broken"),
            (&sara, "check_out", "guest checked out"),
        ] {
            store
                .activity()
                .append(NewLogEntry::record(who, action, details))
                .await
                .unwrap();
        }
        (ActivityService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_search_matches_any_of_the_three_fields_case_insensitively() {
        let (svc, _) = seeded().await;

        // username
        assert_eq!(svc.search("SARA").await.unwrap().len(), 2);
        // action
        assert_eq!(svc.search("issue_rep").await.unwrap().len(), 1);
        // details
        assert_eq!(svc.search("ac broken").await.unwrap().len(), 1);
        // no match
        assert!(svc.search("housekeeping").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_preserves_log_order_and_is_restartable() {
        let (svc, _) = seeded().await;

        let first = svc.search("").await.unwrap();
        assert_eq!(first.len(), 3);
        assert!(first.windows(2).all(|w| w[0].id < w[1].id));

        // Recomputed per call: same result again, no cursor consumed.
        let second = svc.search("").await.unwrap();
        assert_eq!(second.len(), first.len());
    }

    #[tokio::test]
    async fn test_recent_for_user_is_newest_first_and_limited() {
        let (svc, store) = seeded().await;
        let sara = actor("u1", "sara");
        store
            .activity()
            .append(NewLogEntry::record(&sara, "cleaning_done", "cleaning finished"))
            .await
            .unwrap();

        let recent = svc.recent_for_user("u1", 2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].action, "cleaning_done");
        assert_eq!(recent[1].action, "check_out");
        assert!(recent[0].id > recent[1].id);
    }
}
