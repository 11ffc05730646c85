//! LLM integration - Gemini API
//!
//! This module provides:
//! - Gemini HTTP client for single-prompt text generation
//! - Request/response types for `generateContent`
//! - The `Summarizer` implementation used by project analytics

mod client;
mod types;

pub use client::{GEMINI_BASE_URL, GeminiClient, GeminiClientBuilder};
pub use types::{Content, GenerateContentRequest, GenerateContentResponse, Part};
