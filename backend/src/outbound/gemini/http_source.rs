//! Reqwest-backed Gemini source adapter.
//!
//! This adapter owns transport details only: prompt rendering into the wire
//! request, timeout and HTTP error mapping, and decoding the generated text
//! out of the response. The caller decides what to do on failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{GenerateContentRequestDto, GenerateContentResponseDto};
use crate::domain::ports::{
    RecommendationPrompt, RecommendationSource, RecommendationSourceError,
};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Endpoint, credential, and model settings for the Gemini adapter.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL of the API, e.g. `https://generativelanguage.googleapis.com`.
    pub base_url: Url,
    /// API key appended as the `key` query parameter.
    pub api_key: String,
    /// Model identifier in the `generateContent` path.
    pub model: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create a configuration with the default model and timeout.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Gemini source adapter performing HTTP POST requests against
/// `generateContent`.
pub struct GeminiHttpSource {
    client: Client,
    config: GeminiConfig,
}

impl GeminiHttpSource {
    /// Build an adapter using a reqwest client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> Result<Url, RecommendationSourceError> {
        let path = format!("v1beta/models/{}:generateContent", self.config.model);
        let mut url = self.config.base_url.join(&path).map_err(|err| {
            RecommendationSourceError::transport(format!("invalid endpoint URL: {err}"))
        })?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }
}

#[async_trait]
impl RecommendationSource for GeminiHttpSource {
    async fn generate(
        &self,
        prompt: &RecommendationPrompt,
    ) -> Result<String, RecommendationSourceError> {
        let text = prompt.render();
        let request = GenerateContentRequestDto::from_prompt_text(&text);

        let response = self
            .client
            .post(self.endpoint()?)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_generated_text(body.as_ref())
    }
}

fn parse_generated_text(body: &[u8]) -> Result<String, RecommendationSourceError> {
    let decoded: GenerateContentResponseDto = serde_json::from_slice(body).map_err(|error| {
        RecommendationSourceError::decode(format!("invalid generation JSON payload: {error}"))
    })?;
    decoded
        .into_text()
        .ok_or_else(|| RecommendationSourceError::decode("response carried no generated text"))
}

fn map_transport_error(error: reqwest::Error) -> RecommendationSourceError {
    if error.is_timeout() {
        RecommendationSourceError::timeout(error.to_string())
    } else {
        RecommendationSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RecommendationSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RecommendationSourceError::timeout(message)
        }
        _ => RecommendationSourceError::status(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
