//! Projects domain module
//!
//! # Architecture
//!
//! - **Entities**: `Project`, `ProjectStatus`, `NewProject`, `UpdateProject`
//! - **Rules**: end-date / status consistency (`validate_end_date`, `check_end_date`)
//! - **Repository**: `ProjectStore` trait implemented by the storage layer

pub mod dates;
pub mod entity;
pub mod repository;
pub mod rules;

pub use dates::parse_datetime;
pub use entity::{
    NewProject, Project, ProjectChanges, ProjectStatus, UpdateProject, normalize_status,
};
pub use repository::ProjectStore;
pub use rules::{check_end_date, validate_end_date};
