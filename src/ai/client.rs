//! Blocking client for the Anthropic Messages API.

use super::prompt::build_prompt;
use super::response::parse_response;
use super::{ContentGenerator, GenerationError, GenerationRequest};
use crate::config::AiConfig;
use crate::engine::GeneratedContent;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Messages API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message; 1],
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Drafts replies through the Messages API.
pub struct AnthropicClient {
    client: Client,
    messages_url: String,
    api_key: Option<String>,
    api_key_env: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Build a client from config, reading the API key from the configured
    /// environment variable.
    pub fn from_config(config: &AiConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Self::new(config, api_key)
    }

    pub fn new(config: &AiConfig, api_key: Option<String>) -> Self {
        let base = config.base_url.trim_end_matches('/');
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_seconds))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            messages_url: format!("{}/v1/messages", base),
            api_key,
            api_key_env: config.api_key_env.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Endpoint the client posts to.
    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    fn is_official_endpoint(&self) -> bool {
        self.messages_url.starts_with(crate::config::DEFAULT_BASE_URL)
    }
}

impl ContentGenerator for AnthropicClient {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, GenerationError> {
        // A custom base URL may be a proxy that injects credentials itself.
        if self.api_key.is_none() && self.is_official_endpoint() {
            return Err(GenerationError::MissingApiKey(self.api_key_env.clone()));
        }

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: build_prompt(request),
            }],
        };

        info!(model = %self.model, url = %self.messages_url, "requesting AI draft");
        let mut http = self
            .client
            .post(&self.messages_url)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body);
        if let Some(key) = &self.api_key {
            http = http.header("x-api-key", key);
        }

        let response = http.send()?;
        let status = response.status();
        let text = response.text()?;
        debug!(status = status.as_u16(), bytes = text.len(), "AI response received");

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message: truncate(&text, 200),
            });
        }

        parse_response(&text)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
