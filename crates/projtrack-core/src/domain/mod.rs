//! Domain layer
//!
//! Contains the core business logic and domain models.

pub mod analytics;
pub mod projects;
