use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One complete request to the answering service: a system instruction, the
/// assembled user message, and the output token limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
}

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("request to answering service failed: {0}")]
    Http(String),
    #[error("answering service returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("answering service returned no text content")]
    Empty,
}

impl AnswerError {
    /// Worth one bounded retry: transport failures and server-side statuses.
    pub fn is_transient(&self) -> bool {
        match self {
            AnswerError::Http(_) => true,
            AnswerError::Api { status, .. } => *status == 429 || *status >= 500,
            AnswerError::Empty => false,
        }
    }
}

#[async_trait]
pub trait AnswerClient: Send + Sync {
    async fn answer(&self, request: &AnswerRequest) -> Result<String, AnswerError>;

    /// Model identifier for logging and response metadata.
    fn model(&self) -> &str;
}
