//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresRelationshipRepository` - Version-guarded relationship writes
//! - `PostgresContentRepository` - Content items with atomic vote counters

mod content_repository;
mod relationship_repository;

pub use content_repository::PostgresContentRepository;
pub use relationship_repository::PostgresRelationshipRepository;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens a pool when a database URL is configured.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<Option<PgPool>, DomainError> {
    let Some(url) = &config.url else {
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(url.expose_secret())
        .await
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Failed to connect: {}", e)))?;
    Ok(Some(pool))
}
