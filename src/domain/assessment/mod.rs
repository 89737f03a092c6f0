//! Assessment module - PHQ-9/GAD-7 scoring and severity tiers.

mod result;
mod severity;

pub use result::{latest_for_type, AssessmentError, AssessmentResult};
pub use severity::{
    score_to_severity, to_domain_severity, AssessmentType, ClinicalSeverity, DomainSeverity,
    UnknownSeverity, MAX_ANSWER,
};
