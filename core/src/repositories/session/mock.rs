//! Mock implementation of SessionStore for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::session::SessionRecord;
use crate::errors::{DomainError, DomainResult};

use super::r#trait::SessionStore;

/// In-memory session store for testing
///
/// A single write lock guards every mutation, so `revoke_if_active` is
/// observed atomically just like the conditional UPDATE of the SQL
/// implementation. Records are keyed by (token_id, device_id), mirroring
/// the composite primary key of the sessions table.
pub struct MockSessionStore {
    records: Arc<RwLock<HashMap<(String, String), SessionRecord>>>,
}

impl MockSessionStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently stored (test helper)
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Records scoped to a device (test helper)
    pub async fn records_for_device(&self, device_id: &str) -> Vec<SessionRecord> {
        self.records
            .read()
            .await
            .values()
            .filter(|r| r.device_id == device_id)
            .cloned()
            .collect()
    }
}

impl Default for MockSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn insert(&self, record: SessionRecord) -> DomainResult<SessionRecord> {
        let mut records = self.records.write().await;
        let key = (record.token_id.clone(), record.device_id.clone());

        if records.contains_key(&key) {
            return Err(DomainError::DuplicateKey {
                key: format!("({}, {})", record.token_id, record.device_id),
            });
        }

        records.insert(key, record.clone());
        Ok(record)
    }

    async fn find_by_token_id(&self, token_id: &str) -> DomainResult<Option<SessionRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.token_id == token_id)
            .cloned())
    }

    async fn revoke_if_active(&self, token_id: &str) -> DomainResult<bool> {
        let mut records = self.records.write().await;

        match records.values_mut().find(|r| r.token_id == token_id) {
            Some(record) if !record.revoked => {
                record.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_all_for_device(&self, device_id: &str) -> DomainResult<usize> {
        let mut records = self.records.write().await;
        let before = records.len();

        records.retain(|_, r| r.device_id != device_id);

        Ok(before - records.len())
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> DomainResult<usize> {
        let mut records = self.records.write().await;
        let before = records.len();

        records.retain(|_, r| r.expires_at >= cutoff);

        Ok(before - records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_insert_rejects_duplicate_composite_key() {
        let store = MockSessionStore::new();
        let user_id = Uuid::new_v4();

        store
            .insert(SessionRecord::new("jti-1", user_id, "device-1", Duration::days(7)))
            .await
            .unwrap();

        let err = store
            .insert(SessionRecord::new("jti-1", user_id, "device-1", Duration::days(7)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey { .. }));
    }

    #[tokio::test]
    async fn test_insert_keeps_same_token_id_on_another_device() {
        let store = MockSessionStore::new();
        let user_id = Uuid::new_v4();

        store
            .insert(SessionRecord::new("jti-1", user_id, "device-1", Duration::days(7)))
            .await
            .unwrap();
        store
            .insert(SessionRecord::new("jti-1", user_id, "device-2", Duration::days(7)))
            .await
            .unwrap();

        assert_eq!(store.len().await, 2);
        assert_eq!(store.records_for_device("device-1").await.len(), 1);
        assert_eq!(store.records_for_device("device-2").await.len(), 1);
    }
}
