//! In-memory storage implementation
//!
//! DashMap-backed repositories for development and tests. The activity log
//! counter hands out sequence numbers, so insertion order survives the
//! unordered map.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    ActivityLogRepository, Cabin, CabinRepository, DomainResult, Issue, IssueRepository,
    LogEntry, NewLogEntry, RepositoryProvider, User, UserRepository,
};

pub struct InMemoryStore {
    users: DashMap<String, User>,
    cabins: DashMap<String, Cabin>,
    issues: DashMap<String, Issue>,
    log: DashMap<i64, LogEntry>,
    log_counter: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            cabins: DashMap::new(),
            issues: DashMap::new(),
            log: DashMap::new(),
            log_counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryStore {
    fn users(&self) -> &dyn UserRepository {
        self
    }
    fn cabins(&self) -> &dyn CabinRepository {
        self
    }
    fn issues(&self) -> &dyn IssueRepository {
        self
    }
    fn activity(&self) -> &dyn ActivityLogRepository {
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn save(&self, user: User) -> DomainResult<()> {
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.get(id).map(|u| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.clone()))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.clone()).collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.users.remove(id);
        Ok(())
    }
}

#[async_trait]
impl CabinRepository for InMemoryStore {
    async fn save(&self, cabin: Cabin) -> DomainResult<()> {
        self.cabins.insert(cabin.id.clone(), cabin);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Cabin>> {
        Ok(self.cabins.get(id).map(|c| c.clone()))
    }

    async fn list(&self) -> DomainResult<Vec<Cabin>> {
        let mut cabins: Vec<Cabin> = self.cabins.iter().map(|c| c.clone()).collect();
        cabins.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cabins)
    }
}

#[async_trait]
impl IssueRepository for InMemoryStore {
    async fn save(&self, issue: Issue) -> DomainResult<()> {
        self.issues.insert(issue.id.clone(), issue);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Issue>> {
        Ok(self.issues.get(id).map(|i| i.clone()))
    }

    async fn list(&self) -> DomainResult<Vec<Issue>> {
        let mut issues: Vec<Issue> = self.issues.iter().map(|i| i.clone()).collect();
        issues.sort_by(|a, b| a.reported_at.cmp(&b.reported_at));
        Ok(issues)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.issues.remove(id);
        Ok(())
    }
}

#[async_trait]
impl ActivityLogRepository for InMemoryStore {
    async fn append(&self, entry: NewLogEntry) -> DomainResult<LogEntry> {
        let id = self.log_counter.fetch_add(1, Ordering::SeqCst);
        let entry = LogEntry {
            id,
            user_id: entry.user_id,
            username: entry.username,
            action: entry.action,
            details: entry.details,
            timestamp: entry.timestamp,
        };
        self.log.insert(id, entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> DomainResult<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = self.log.iter().map(|e| e.clone()).collect();
        entries.sort_by_key(|e| e.id);
        Ok(entries)
    }

    async fn list_for_user(&self, user_id: &str, limit: u64) -> DomainResult<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = self
            .log
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.clone())
            .collect();
        entries.sort_by_key(|e| std::cmp::Reverse(e.id));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_append_assigns_monotone_sequence() {
        let store = InMemoryStore::new();
        let actor = User {
            id: "u1".into(),
            username: "sara".into(),
            password: "pw".into(),
            role: crate::domain::Role::Reception,
            created_at: Utc::now(),
        };

        // Identical timestamps: order must still come from the sequence.
        let ts = Utc::now();
        for i in 0..3 {
            let mut entry = NewLogEntry::record(&actor, "check_in", format!("entry {i}"));
            entry.timestamp = ts;
            store.activity().append(entry).await.unwrap();
        }

        let entries = store.activity().list().await.unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(entries[0].details, "entry 0");
        assert_eq!(entries[2].details, "entry 2");
    }

    #[tokio::test]
    async fn test_save_overwrites_by_id() {
        let store = InMemoryStore::new();
        let mut cabin = Cabin {
            id: "c1".into(),
            name: "Bird".into(),
            icon: "Bird".into(),
            status: crate::domain::CabinStatus::EmptyClean,
            active_issue_id: None,
        };
        store.cabins().save(cabin.clone()).await.unwrap();

        cabin.status = crate::domain::CabinStatus::Occupied;
        store.cabins().save(cabin).await.unwrap();

        let found = store.cabins().find_by_id("c1").await.unwrap().unwrap();
        assert_eq!(found.status, crate::domain::CabinStatus::Occupied);
        assert_eq!(store.cabins().list().await.unwrap().len(), 1);
    }
}
