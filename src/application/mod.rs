//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers never reach adapters directly; wiring supplies them as trait
//! objects.

pub mod handlers;

pub use handlers::*;
