//! Projtrack HTTP API
//!
//! JSON endpoints for project CRUD, status statistics and per-project
//! summaries, backed by `projtrack-core`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use state::AppState;
