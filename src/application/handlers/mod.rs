//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! Each handler holds its ports as `Arc<dyn Port>` and exposes a single
//! `handle` method.

pub mod assessment;
pub mod chat;
pub mod moderation;
pub mod recommendation;
pub mod relationship;
pub mod vocabulary;

pub use assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult};
pub use chat::{ScreenChatMessageCommand, ScreenChatMessageHandler, ScreenChatMessageResult};
pub use moderation::{
    AutoModeration, CastVoteCommand, CastVoteHandler, CastVoteResult, ClassifyContentCommand,
    ClassifyContentHandler, ContentResult, DeleteContentCommand, DeleteContentHandler,
    EditContentCommand, EditContentHandler, ModerateContentCommand, ModerateContentHandler,
    ModerationDecision, PublishContentCommand, PublishContentHandler,
};
pub use recommendation::{
    RecommendForAssessmentHandler, RecommendForAssessmentQuery, RecommendForAssessmentResult,
    RecommendFromDiaryHandler, RecommendFromDiaryQuery, RecommendFromDiaryResult,
    RecordHelpfulCommand, RecordHelpfulHandler,
};
pub use relationship::{
    AcceptRelationshipCommand, AcceptRelationshipHandler, BlockRelationshipCommand,
    BlockRelationshipHandler, RelationshipResult, RequestRelationshipCommand,
    RequestRelationshipHandler, RevokeRelationshipCommand, RevokeRelationshipHandler,
    UnblockRelationshipCommand, UnblockRelationshipHandler,
};
pub use vocabulary::{AddCustomFeelingCommand, AddCustomFeelingHandler, AddCustomFeelingResult};
