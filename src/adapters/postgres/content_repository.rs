//! PostgreSQL implementation of ContentRepository.
//!
//! ```sql
//! CREATE TABLE content_items (
//!     id                 UUID PRIMARY KEY,
//!     author_id          TEXT NOT NULL,
//!     parent_id          UUID REFERENCES content_items (id),
//!     body               TEXT NOT NULL,
//!     status             TEXT NOT NULL,
//!     label              TEXT,
//!     confidence         DOUBLE PRECISION,
//!     last_checked       TIMESTAMPTZ,
//!     edited             BOOLEAN NOT NULL DEFAULT FALSE,
//!     up_votes           BIGINT NOT NULL DEFAULT 0,
//!     down_votes         BIGINT NOT NULL DEFAULT 0,
//!     version            BIGINT NOT NULL DEFAULT 0,
//!     created_at         TIMESTAMPTZ NOT NULL,
//!     updated_at         TIMESTAMPTZ NOT NULL
//! );
//! ```
//!
//! A NULL `parent_id` marks a post; comments reference their parent.
//! Updates are guarded by `version`; vote increments leave it alone.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::domain::foundation::{ContentId, DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::moderation::{Classification, ContentItem, ContentKind, ModerationStatus, Vote};
use crate::ports::ContentRepository;

pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: Uuid,
    author_id: String,
    parent_id: Option<Uuid>,
    body: String,
    status: String,
    label: Option<String>,
    confidence: Option<f64>,
    last_checked: Option<DateTime<Utc>>,
    edited: bool,
    up_votes: i64,
    down_votes: i64,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentItem {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let author_id = UserId::new(row.author_id)
            .map_err(|e| db_error(format!("Invalid author id: {}", e)))?;
        let kind = match row.parent_id {
            Some(parent) => ContentKind::Comment {
                parent: ContentId::from_uuid(parent),
            },
            None => ContentKind::Post,
        };
        let classification = match (row.label, row.confidence, row.last_checked) {
            (Some(label), Some(confidence), Some(checked)) => Some(
                Classification::new(label, confidence, Timestamp::from_datetime(checked))
                    .map_err(|e| db_error(format!("Invalid stored classification: {}", e)))?,
            ),
            _ => None,
        };

        Ok(ContentItem::reconstitute(
            ContentId::from_uuid(row.id),
            author_id,
            kind,
            row.body,
            parse_status(&row.status)?,
            classification,
            row.edited,
            row.up_votes.max(0) as u64,
            row.down_votes.max(0) as u64,
            row.version.max(0) as u64,
            Timestamp::from_datetime(row.created_at),
            Timestamp::from_datetime(row.updated_at),
        ))
    }
}

fn parse_status(s: &str) -> Result<ModerationStatus, DomainError> {
    match s {
        "Visible" => Ok(ModerationStatus::Visible),
        "Flagged" => Ok(ModerationStatus::Flagged),
        "Hidden" => Ok(ModerationStatus::Hidden),
        _ => Err(db_error(format!("Invalid moderation status: {}", s))),
    }
}

fn parent_of(kind: &ContentKind) -> Option<Uuid> {
    match kind {
        ContentKind::Post => None,
        ContentKind::Comment { parent } => Some(*parent.as_uuid()),
    }
}

fn db_error(message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, message)
}

fn not_found(id: &ContentId) -> DomainError {
    DomainError::not_found(ErrorCode::ContentNotFound, "Content", id)
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn save(&self, item: &ContentItem) -> Result<(), DomainError> {
        let classification = item.classification();
        sqlx::query(
            r#"
            INSERT INTO content_items (
                id, author_id, parent_id, body, status, label, confidence, last_checked,
                edited, up_votes, down_votes, version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(item.author_id.as_str())
        .bind(parent_of(&item.kind))
        .bind(item.body())
        .bind(item.status().as_str())
        .bind(classification.map(|c| c.label.clone()))
        .bind(classification.map(|c| c.confidence))
        .bind(classification.map(|c| *c.last_checked.as_datetime()))
        .bind(item.is_edited())
        .bind(item.up_votes as i64)
        .bind(item.down_votes as i64)
        .bind(item.version as i64)
        .bind(item.created_at.as_datetime())
        .bind(item.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error(format!("Failed to save content: {}", e)))?;

        Ok(())
    }

    async fn update(&self, item: &ContentItem) -> Result<u64, DomainError> {
        let classification = item.classification();
        let next_version: Option<(i64,)> = sqlx::query_as(
            r#"
            UPDATE content_items SET
                body = $2,
                status = $3,
                label = $4,
                confidence = $5,
                last_checked = $6,
                edited = $7,
                updated_at = $8,
                version = version + 1
            WHERE id = $1 AND version = $9
            RETURNING version
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(item.body())
        .bind(item.status().as_str())
        .bind(classification.map(|c| c.label.clone()))
        .bind(classification.map(|c| c.confidence))
        .bind(classification.map(|c| *c.last_checked.as_datetime()))
        .bind(item.is_edited())
        .bind(item.updated_at.as_datetime())
        .bind(item.version as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error(format!("Failed to update content: {}", e)))?;

        match next_version {
            Some((version,)) => Ok(version.max(0) as u64),
            None => {
                let (exists,): (bool,) =
                    sqlx::query_as("SELECT EXISTS (SELECT 1 FROM content_items WHERE id = $1)")
                        .bind(item.id.as_uuid())
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| db_error(format!("Failed to check content: {}", e)))?;
                if exists {
                    debug!(content_id = %item.id, version = item.version, "Content version moved");
                    Err(DomainError::concurrent_modification(item.id.to_string()))
                } else {
                    Err(not_found(&item.id))
                }
            }
        }
    }

    async fn find(&self, id: &ContentId) -> Result<Option<ContentItem>, DomainError> {
        let row: Option<ContentRow> = sqlx::query_as(
            r#"
            SELECT id, author_id, parent_id, body, status, label, confidence, last_checked,
                   edited, up_votes, down_votes, version, created_at, updated_at
            FROM content_items
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error(format!("Failed to find content: {}", e)))?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn increment_vote(&self, id: &ContentId, vote: Vote) -> Result<(u64, u64), DomainError> {
        let sql = match vote {
            Vote::Up => {
                "UPDATE content_items SET up_votes = up_votes + 1 WHERE id = $1 \
                 RETURNING up_votes, down_votes"
            }
            Vote::Down => {
                "UPDATE content_items SET down_votes = down_votes + 1 WHERE id = $1 \
                 RETURNING up_votes, down_votes"
            }
        };

        let counts: Option<(i64, i64)> = sqlx::query_as(sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to record vote: {}", e)))?;

        let (up, down) = counts.ok_or_else(|| not_found(id))?;
        Ok((up.max(0) as u64, down.max(0) as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_name() {
        for status in [
            ModerationStatus::Visible,
            ModerationStatus::Flagged,
            ModerationStatus::Hidden,
        ] {
            assert_eq!(parse_status(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn parent_id_distinguishes_comments() {
        let parent = ContentId::new();
        assert_eq!(parent_of(&ContentKind::Post), None);
        assert_eq!(
            parent_of(&ContentKind::Comment { parent }),
            Some(*parent.as_uuid())
        );
    }

    #[test]
    fn partial_classification_columns_are_ignored() {
        let now = Utc::now();
        let row = ContentRow {
            id: Uuid::new_v4(),
            author_id: "author".to_string(),
            parent_id: None,
            body: "hello".to_string(),
            status: "Flagged".to_string(),
            label: Some("Toxic".to_string()),
            confidence: None,
            last_checked: None,
            edited: false,
            up_votes: 2,
            down_votes: 1,
            version: 4,
            created_at: now,
            updated_at: now,
        };

        let item = ContentItem::try_from(row).unwrap();
        assert!(item.classification().is_none());
        assert_eq!(item.status(), ModerationStatus::Flagged);
        assert_eq!(item.vote_score(), 1);
        assert_eq!(item.version, 4);
    }
}
