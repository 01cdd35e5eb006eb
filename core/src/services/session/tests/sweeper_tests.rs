//! Unit tests for the sweeper

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::session::SessionRecord;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::session::MockSessionStore;
use crate::repositories::user::MockUserRepository;
use crate::repositories::{SessionStore, UserRepository};
use crate::services::session::{SessionConfig, SessionService, Sweeper, SweeperConfig};

#[tokio::test]
async fn test_sweep_removes_only_expired_records() {
    let store = Arc::new(MockSessionStore::new());
    let user_id = Uuid::new_v4();

    // Expired one second ago.
    store
        .insert(SessionRecord::new(
            "expired-jti",
            user_id,
            "device-1",
            Duration::seconds(-1),
        ))
        .await
        .unwrap();
    // Active record on another device.
    store
        .insert(SessionRecord::new(
            "active-jti",
            user_id,
            "device-2",
            Duration::days(7),
        ))
        .await
        .unwrap();

    let sweeper = Sweeper::new(Arc::clone(&store), SweeperConfig::default());
    let deleted = sweeper.sweep(Utc::now()).await.unwrap();

    assert_eq!(deleted, 1);
    assert!(store.find_by_token_id("expired-jti").await.unwrap().is_none());
    assert!(store.find_by_token_id("active-jti").await.unwrap().is_some());
}

#[tokio::test]
async fn test_sweep_is_idempotent() {
    let store = Arc::new(MockSessionStore::new());
    store
        .insert(SessionRecord::new(
            "expired-jti",
            Uuid::new_v4(),
            "device-1",
            Duration::seconds(-1),
        ))
        .await
        .unwrap();

    let sweeper = Sweeper::new(Arc::clone(&store), SweeperConfig::default());

    assert_eq!(sweeper.sweep(Utc::now()).await.unwrap(), 1);
    assert_eq!(sweeper.sweep(Utc::now()).await.unwrap(), 0);
}

/// Store whose expiry cleanup always fails, for the best-effort contract
struct FailingSweepStore {
    inner: MockSessionStore,
}

#[async_trait]
impl SessionStore for FailingSweepStore {
    async fn insert(&self, record: SessionRecord) -> DomainResult<SessionRecord> {
        self.inner.insert(record).await
    }

    async fn find_by_token_id(&self, token_id: &str) -> DomainResult<Option<SessionRecord>> {
        self.inner.find_by_token_id(token_id).await
    }

    async fn revoke_if_active(&self, token_id: &str) -> DomainResult<bool> {
        self.inner.revoke_if_active(token_id).await
    }

    async fn delete_all_for_device(&self, device_id: &str) -> DomainResult<usize> {
        self.inner.delete_all_for_device(device_id).await
    }

    async fn delete_expired_before(&self, _cutoff: DateTime<Utc>) -> DomainResult<usize> {
        Err(DomainError::Internal {
            message: "storage unavailable".to_string(),
        })
    }
}

#[tokio::test]
async fn test_sweep_best_effort_swallows_failures() {
    let store = Arc::new(FailingSweepStore {
        inner: MockSessionStore::new(),
    });

    let sweeper = Sweeper::new(Arc::clone(&store), SweeperConfig::default());
    assert_eq!(sweeper.sweep_best_effort(Utc::now()).await, 0);
}

#[tokio::test]
async fn test_generate_session_succeeds_when_sweep_fails() {
    let store = Arc::new(FailingSweepStore {
        inner: MockSessionStore::new(),
    });
    let users = Arc::new(MockUserRepository::new());
    let user = users.insert(User::new("alice", "hash")).await.unwrap();

    let service = SessionService::new(store, users, SessionConfig::default());

    let tokens = service.generate_session(&user, None).await.unwrap();
    assert!(!tokens.refresh_token.is_empty());
}
