//! Recommendation handlers.

mod for_assessment;
mod from_diary;
mod record_helpful;

pub use for_assessment::{
    RecommendForAssessmentHandler, RecommendForAssessmentQuery, RecommendForAssessmentResult,
};
pub use from_diary::{RecommendFromDiaryHandler, RecommendFromDiaryQuery, RecommendFromDiaryResult};
pub use record_helpful::{RecordHelpfulCommand, RecordHelpfulHandler};
