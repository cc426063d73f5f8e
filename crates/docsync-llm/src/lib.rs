#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Client for a hosted OpenAI-style chat-completions API, plus the fixed
//! prompt templates a sync pass formats its pairs into.
//!
//! # Design
//! - One prompt in, one generated text out; no streaming, no retries.
//! - The base URL is configurable so tests can target a local mock server.
//! - A per-run request identifier travels as a default `x-request-id` header.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LlmError, LlmResult};

pub mod error;
pub mod prompt;

const HEADER_REQUEST_ID: &str = "x-request-id";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Settings needed to construct a [`ChatModel`].
#[derive(Debug, Clone)]
pub struct ChatModelConfig {
    /// Base URL of the chat-completions API.
    pub api_url: String,
    /// Bearer token presented to the API.
    pub api_key: String,
    /// Model identifier requested per completion.
    pub model: String,
    /// Sampling temperature requested per completion.
    pub temperature: f32,
    /// Fixed HTTP client timeout.
    pub timeout: Duration,
    /// Identifier attached to every request as `x-request-id`.
    pub request_id: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Blocking-style (awaited sequentially) client for one hosted chat model.
#[derive(Debug, Clone)]
pub struct ChatModel {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f32,
}

impl ChatModel {
    /// Build a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::InvalidApiUrl`] when the base URL does not parse
    /// and [`LlmError::BuildClient`] when the HTTP client cannot be built.
    pub fn new(config: &ChatModelConfig) -> LlmResult<Self> {
        let base = Url::parse(&config.api_url).map_err(|source| LlmError::InvalidApiUrl {
            url: config.api_url.clone(),
            source,
        })?;
        let endpoint = base.join(COMPLETIONS_PATH).map_err(|source| LlmError::InvalidApiUrl {
            url: config.api_url.clone(),
            source,
        })?;

        let mut default_headers = HeaderMap::new();
        let request_id =
            HeaderValue::from_str(&config.request_id).map_err(|_| LlmError::BuildClient {
                detail: "request identifier contains invalid characters".to_string(),
            })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|err| LlmError::BuildClient {
                detail: err.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    /// Send one prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Request`] on transport failure, [`LlmError::Api`]
    /// on a non-success status, [`LlmError::DecodeResponse`] when the body is
    /// not the expected shape, and [`LlmError::EmptyResponse`] when the API
    /// returns no choices.
    pub async fn generate(&self, prompt: &str) -> LlmResult<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatRequestMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "requesting chat completion");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| LlmError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                detail: detail.trim().to_string(),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|source| LlmError::DecodeResponse { source })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        debug!(response_chars = content.len(), "received chat completion");
        Ok(content)
    }
}
