//! Storage layer - SQLite
//!
//! Provides database management, migrations and the project store.
//!
//! # Architecture
//!
//! - `database`: Connection pool management and initialization
//! - `migrations`: Schema versioning and automatic migration
//! - `project_store`: `ProjectStore` implementation over the `projects` table
//!
//! # Usage
//!
//! ```ignore
//! use projtrack_core::storage::{Database, SqliteProjectStore};
//!
//! // Create an in-memory database for testing
//! let db = Database::in_memory().await?;
//! let store = SqliteProjectStore::new(db);
//! ```

pub mod database;
pub mod migrations;
pub mod project_store;

// Re-export commonly used types
pub use database::{Database, DatabaseConfig, default_database_path};
pub use migrations::{CURRENT_VERSION, MigrationStatus, migration_status, run_migrations};
pub use project_store::SqliteProjectStore;
