//! Anthropic Messages API client for the answering service.

use crate::clients::traits::{AnswerClient, AnswerError, AnswerRequest};
use crate::config::{AnswerConfig, RuntimeConfig};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    retries: u32,
    retry_delay_ms: u64,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Serialize)]
struct MessageParam<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, answer: &AnswerConfig, runtime: &RuntimeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(runtime.request_timeout_ms))
            .build()
            .context("Failed to build reqwest client with timeout")?;

        Ok(Self {
            client,
            api_key,
            model: answer.model.clone(),
            retries: answer.retries,
            retry_delay_ms: runtime.retry_delay_ms,
        })
    }

    async fn send(&self, request: &AnswerRequest) -> Result<String, AnswerError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            system: &request.system,
            messages: vec![MessageParam {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnswerError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnswerError::Api { status, body });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AnswerError::Http(format!("failed to parse response: {}", e)))?;

        parsed
            .content
            .into_iter()
            .map(|block| block.text)
            .find(|text| !text.is_empty())
            .ok_or(AnswerError::Empty)
    }
}

#[async_trait]
impl AnswerClient for AnthropicClient {
    async fn answer(&self, request: &AnswerRequest) -> Result<String, AnswerError> {
        debug!(
            "Requesting answer (model={}, prompt chars={})",
            self.model,
            request.prompt.len()
        );

        // Bounded retry with exponential backoff on transient failures
        let mut attempt = 0u32;
        loop {
            match self.send(request).await {
                Ok(text) => return Ok(text),
                Err(err) if attempt < self.retries && err.is_transient() => {
                    let delay_ms = self.retry_delay_ms * (1u64 << attempt);
                    debug!("Answer attempt {} failed ({}), retrying", attempt + 1, err);
                    tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
