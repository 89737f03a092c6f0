//! In-memory adapters for every repository and reader port.
//!
//! Thread-safe via `tokio::sync::RwLock`. Used in tests and single-process
//! deployments; nothing survives a restart.

mod assessment_repository;
mod collaborative_stats;
mod content_repository;
mod emotion_entries;
mod relationship_repository;
mod strategy_catalog;
mod vocabulary_repository;

pub use assessment_repository::InMemoryAssessmentRepository;
pub use collaborative_stats::InMemoryCollaborativeStats;
pub use content_repository::InMemoryContentRepository;
pub use emotion_entries::InMemoryEmotionEntries;
pub use relationship_repository::InMemoryRelationshipRepository;
pub use strategy_catalog::InMemoryStrategyCatalog;
pub use vocabulary_repository::InMemoryVocabularyRepository;
