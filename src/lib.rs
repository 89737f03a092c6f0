//! Wellspring - emotional wellbeing core
//!
//! Coping strategy recommendations from clinical screening and diary
//! history, consent-gated relationships between users, and moderation of
//! user-generated content.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
