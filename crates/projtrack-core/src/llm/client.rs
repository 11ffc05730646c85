//! Gemini client implementation
//!
//! Async HTTP client for the Gemini `generateContent` endpoint, used as the
//! project summarizer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use crate::config::SummarizerConfig;
use crate::domain::analytics::Summarizer;
use crate::error::{Error, Result};

use super::types::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Gemini API base URL
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Header carrying the API key; keeps the key out of request URLs
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini client
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Builder for creating a GeminiClient
#[derive(Default)]
pub struct GeminiClientBuilder {
    config: Option<SummarizerConfig>,
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
}

impl GeminiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summarizer configuration
    pub fn config(mut self, config: SummarizerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the base URL from the configuration
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the model from the configuration
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the GeminiClient
    pub fn build(self) -> Result<GeminiClient> {
        let config = self.config.unwrap_or_default();
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::configuration("API key is required"))?;

        let timeout_secs = self.timeout_secs.unwrap_or(config.timeout_secs);
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let base_url = self.base_url.unwrap_or(config.base_url);

        Ok(GeminiClient {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: self.model.unwrap_or(config.model),
        })
    }
}

impl GeminiClient {
    /// Create a client from configuration and an API key
    pub fn new(config: SummarizerConfig, api_key: impl Into<String>) -> Result<Self> {
        GeminiClientBuilder::new()
            .config(config)
            .api_key(api_key)
            .build()
    }

    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::new()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Generate text for a single prompt
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt);

        debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Summarizer(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &body.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "generateContent usage"
            );
        }

        body.text()
            .ok_or_else(|| Error::Summarizer("Empty response from summarizer".to_string()))
    }

    /// Map a non-2xx response to a summarizer error
    async fn error_from_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> Error {
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);

        warn!(status = status.as_u16(), "Summarizer request failed");

        let message = match status.as_u16() {
            400 => format!("Bad request: {}", detail),
            401 | 403 => format!("Unauthorized: {}", detail),
            404 => format!("Model not found: {}", detail),
            429 => format!("Rate limited: {}", detail),
            500..=599 => format!("Server error ({}): {}", status.as_u16(), detail),
            code => format!("HTTP error {}: {}", code, detail),
        };
        Error::Summarizer(message)
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        self.generate(prompt).await
    }
}
