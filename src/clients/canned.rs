//! Deterministic offline answering client for tests and keyless runs.

use crate::clients::traits::{AnswerClient, AnswerError, AnswerRequest};
use async_trait::async_trait;

/// Produces a stable, locally generated reply derived from the request.
/// No network; same request always yields the same text.
pub struct CannedAnswerer {
    model: String,
}

impl CannedAnswerer {
    pub fn new() -> Self {
        Self {
            model: "canned-offline".to_string(),
        }
    }
}

impl Default for CannedAnswerer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerClient for CannedAnswerer {
    async fn answer(&self, request: &AnswerRequest) -> Result<String, AnswerError> {
        Ok(format!(
            "[offline answer] No answering service is configured. The question was \
             received with {} characters of regulatory context; consult the documents \
             listed there directly.",
            request.prompt.chars().count()
        ))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_answer_is_deterministic() {
        let client = CannedAnswerer::new();
        let request = AnswerRequest {
            system: "sys".to_string(),
            prompt: "QUESTION: what?".to_string(),
            max_tokens: 64,
        };
        let a = client.answer(&request).await.unwrap();
        let b = client.answer(&request).await.unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("[offline answer]"));
    }
}
