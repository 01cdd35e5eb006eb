//! MySQL implementation of the SessionStore trait.
//!
//! Persists refresh-session records with SQLx. The one-time-use guarantee
//! of rotation rests on `revoke_if_active` being a single conditional
//! UPDATE whose affected-row count reports whether this call flipped the
//! flag; there is deliberately no read-then-write variant here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sg_core::domain::entities::session::SessionRecord;
use sg_core::errors::{DomainError, DomainResult};
use sg_core::repositories::SessionStore;

/// MySQL implementation of SessionStore
pub struct MySqlSessionStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionStore {
    /// Create a new MySQL session store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a SessionRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> DomainResult<SessionRecord> {
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(SessionRecord {
            token_id: row.try_get("token_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token_id: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            device_id: row.try_get("device_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get device_id: {}", e),
            })?,
            revoked: row.try_get("revoked").map_err(|e| DomainError::Internal {
                message: format!("Failed to get revoked: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl SessionStore for MySqlSessionStore {
    async fn insert(&self, record: SessionRecord) -> DomainResult<SessionRecord> {
        let query = r#"
            INSERT INTO sessions (
                token_id, device_id, user_id, revoked, created_at, expires_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&record.token_id)
            .bind(&record.device_id)
            .bind(record.user_id.to_string())
            .bind(record.revoked)
            .bind(record.created_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(record),
            Err(sqlx::Error::Database(db_err))
                if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                Err(DomainError::DuplicateKey {
                    key: format!("({}, {})", record.token_id, record.device_id),
                })
            }
            Err(e) => Err(DomainError::Internal {
                message: format!("Failed to insert session record: {}", e),
            }),
        }
    }

    async fn find_by_token_id(&self, token_id: &str) -> DomainResult<Option<SessionRecord>> {
        let query = r#"
            SELECT token_id, device_id, user_id, revoked, created_at, expires_at
            FROM sessions
            WHERE token_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find session record: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn revoke_if_active(&self, token_id: &str) -> DomainResult<bool> {
        // Single compare-and-swap on the revoked flag; the affected-row
        // count tells us whether this call performed the consumption.
        let query = r#"
            UPDATE sessions
            SET revoked = TRUE
            WHERE token_id = ? AND revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(token_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to revoke session record: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_for_device(&self, device_id: &str) -> DomainResult<usize> {
        let query = "DELETE FROM sessions WHERE device_id = ?";

        let result = sqlx::query(query)
            .bind(device_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete device sessions: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> DomainResult<usize> {
        let query = "DELETE FROM sessions WHERE expires_at < ?";

        let result = sqlx::query(query)
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete expired sessions: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }
}
