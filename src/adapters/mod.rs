//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory repositories for tests and single-process use
//! - `postgres` - PostgreSQL persistence (sqlx)
//! - `classifier` - HTTP classifier, fail-open wrapper, moderation endpoint

pub mod classifier;
pub mod memory;
pub mod postgres;

pub use classifier::{
    text_classifier_from_config, FailOpenClassifier, HttpClassifierConfig, HttpModerationProvider,
    HttpTextClassifier,
};
pub use memory::{
    InMemoryAssessmentRepository, InMemoryCollaborativeStats, InMemoryContentRepository,
    InMemoryEmotionEntries, InMemoryRelationshipRepository, InMemoryStrategyCatalog,
    InMemoryVocabularyRepository,
};
pub use postgres::{PostgresContentRepository, PostgresRelationshipRepository};
