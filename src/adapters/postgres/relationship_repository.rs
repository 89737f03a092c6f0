//! PostgreSQL implementation of RelationshipRepository.
//!
//! ```sql
//! CREATE TABLE relationships (
//!     key           TEXT PRIMARY KEY,
//!     participant_a TEXT NOT NULL,
//!     participant_b TEXT NOT NULL,
//!     status        TEXT NOT NULL,
//!     consent_a     BOOLEAN NOT NULL,
//!     consent_b     BOOLEAN NOT NULL,
//!     blocked_by    TEXT,
//!     next_seq      BIGINT NOT NULL DEFAULT 0,
//!     version       BIGINT NOT NULL,
//!     created_at    TIMESTAMPTZ NOT NULL,
//!     updated_at    TIMESTAMPTZ NOT NULL
//! );
//! ```
//!
//! `participant_a` is always the lexicographically smaller id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::relationship::{Relationship, RelationshipKey, RelationshipStatus};
use crate::ports::RelationshipRepository;

pub struct PostgresRelationshipRepository {
    pool: PgPool,
}

impl PostgresRelationshipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RelationshipRow {
    participant_a: String,
    participant_b: String,
    status: String,
    consent_a: bool,
    consent_b: bool,
    blocked_by: Option<String>,
    next_seq: i64,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RelationshipRow> for Relationship {
    type Error = DomainError;

    fn try_from(row: RelationshipRow) -> Result<Self, Self::Error> {
        let a = stored_user_id(row.participant_a)?;
        let b = stored_user_id(row.participant_b)?;
        let blocked_by = row.blocked_by.map(stored_user_id).transpose()?;

        Relationship::reconstitute(
            &a,
            &b,
            parse_status(&row.status)?,
            row.consent_a,
            row.consent_b,
            blocked_by,
            row.next_seq as u64,
            row.version as u64,
            Timestamp::from_datetime(row.created_at),
            Timestamp::from_datetime(row.updated_at),
        )
        .map_err(|e| db_error(format!("Invalid stored relationship: {}", e)))
    }
}

fn stored_user_id(raw: String) -> Result<UserId, DomainError> {
    UserId::new(raw).map_err(|e| db_error(format!("Invalid user id: {}", e)))
}

fn parse_status(s: &str) -> Result<RelationshipStatus, DomainError> {
    match s {
        "pending" => Ok(RelationshipStatus::Pending),
        "consented" => Ok(RelationshipStatus::Consented),
        "revoked" => Ok(RelationshipStatus::Revoked),
        "blocked" => Ok(RelationshipStatus::Blocked),
        _ => Err(db_error(format!("Invalid status value: {}", s))),
    }
}

fn db_error(message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, message)
}

const SELECT_COLUMNS: &str = "participant_a, participant_b, status, consent_a, consent_b, \
     blocked_by, next_seq, version, created_at, updated_at";

#[async_trait]
impl RelationshipRepository for PostgresRelationshipRepository {
    async fn find(&self, key: &RelationshipKey) -> Result<Option<Relationship>, DomainError> {
        let row: Option<RelationshipRow> = sqlx::query_as(&format!(
            "SELECT {} FROM relationships WHERE key = $1",
            SELECT_COLUMNS
        ))
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error(format!("Failed to find relationship: {}", e)))?;

        row.map(Relationship::try_from).transpose()
    }

    async fn save_if_version(
        &self,
        relationship: &Relationship,
        expected_version: Option<u64>,
    ) -> Result<u64, DomainError> {
        let [a, b] = relationship.participants();
        let next_version = expected_version.unwrap_or(0) + 1;

        let result = match expected_version {
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO relationships (
                        key, participant_a, participant_b, status, consent_a, consent_b,
                        blocked_by, next_seq, version, created_at, updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    ON CONFLICT (key) DO NOTHING
                    "#,
                )
                .bind(relationship.key().as_str())
                .bind(a.as_str())
                .bind(b.as_str())
                .bind(relationship.status().as_str())
                .bind(relationship.consent_of(a))
                .bind(relationship.consent_of(b))
                .bind(relationship.blocked_by().map(|u| u.as_str()))
                .bind(relationship.next_seq() as i64)
                .bind(next_version as i64)
                .bind(relationship.created_at.as_datetime())
                .bind(relationship.updated_at.as_datetime())
                .execute(&self.pool)
                .await
            }
            Some(expected) => {
                sqlx::query(
                    r#"
                    UPDATE relationships SET
                        status = $2,
                        consent_a = $3,
                        consent_b = $4,
                        blocked_by = $5,
                        next_seq = $6,
                        updated_at = $7,
                        version = version + 1
                    WHERE key = $1 AND version = $8
                    "#,
                )
                .bind(relationship.key().as_str())
                .bind(relationship.status().as_str())
                .bind(relationship.consent_of(a))
                .bind(relationship.consent_of(b))
                .bind(relationship.blocked_by().map(|u| u.as_str()))
                .bind(relationship.next_seq() as i64)
                .bind(relationship.updated_at.as_datetime())
                .bind(expected as i64)
                .execute(&self.pool)
                .await
            }
        }
        .map_err(|e| db_error(format!("Failed to save relationship: {}", e)))?;

        if result.rows_affected() == 0 {
            debug!(key = %relationship.key(), ?expected_version, "Relationship version moved");
            return Err(DomainError::concurrent_modification(relationship.key().as_str()));
        }

        Ok(next_version)
    }

    async fn list_for_user(&self, user: &UserId) -> Result<Vec<Relationship>, DomainError> {
        let rows: Vec<RelationshipRow> = sqlx::query_as(&format!(
            "SELECT {} FROM relationships WHERE participant_a = $1 OR participant_b = $1 ORDER BY key",
            SELECT_COLUMNS
        ))
        .bind(user.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error(format!("Failed to list relationships: {}", e)))?;

        rows.into_iter().map(Relationship::try_from).collect()
    }
}
