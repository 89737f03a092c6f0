//! Assessment handlers.

mod submit;

pub use submit::{SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult};
