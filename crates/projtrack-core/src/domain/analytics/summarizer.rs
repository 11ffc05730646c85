//! Text summarization collaborator

use async_trait::async_trait;

use crate::error::Result;

/// Produces a natural-language summary from a prompt
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String>;
}
