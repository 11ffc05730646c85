//! Analytics domain module
//!
//! Status statistics over the project collection and the summarization
//! collaborator used for per-project analysis.

pub mod stats;
pub mod summarizer;

pub use stats::{GraphicsData, StatusSummary, aggregate, percentage};
pub use summarizer::Summarizer;
