//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repositories
//!
//! - `RelationshipRepository` - Version-guarded relationship persistence
//! - `AssessmentRepository` - Screening results
//! - `ContentRepository` - Posts and comments with atomic vote counters
//! - `VocabularyRepository` - Per-user feeling vocabulary
//!
//! ## Readers
//!
//! - `EmotionEntryReader` - Windowed diary reads
//! - `StrategyCatalog` - Shared coping strategy catalog
//! - `CollaborativeStatsStore` - Helpfulness feedback
//!
//! ## External services
//!
//! - `TextClassifier` - Content labelling
//! - `ModerationProvider` - Self-harm flagging for chat

mod assessment_repository;
mod collaborative_stats_store;
mod content_repository;
mod emotion_entry_reader;
mod moderation_provider;
mod relationship_repository;
mod strategy_catalog;
mod text_classifier;
mod vocabulary_repository;

pub use assessment_repository::AssessmentRepository;
pub use collaborative_stats_store::CollaborativeStatsStore;
pub use content_repository::ContentRepository;
pub use emotion_entry_reader::EmotionEntryReader;
pub use moderation_provider::ModerationProvider;
pub use relationship_repository::RelationshipRepository;
pub use strategy_catalog::StrategyCatalog;
pub use text_classifier::TextClassifier;
pub use vocabulary_repository::VocabularyRepository;
