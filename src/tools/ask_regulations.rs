//! Question answering: retrieve context, assemble the prompt, call the
//! answering service.

use crate::clients::AnswerRequest;
use crate::error::{RegulatoryError, Result};
use crate::links::{UrlMap, format_reference_link};
use crate::prompts;
use crate::search;
use crate::server::RegulatoryServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct AskRegulationsParams {
    pub question: String,
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl RegulatoryServer {
    pub async fn handle_ask_regulations(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| RegulatoryError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: AskRegulationsParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                RegulatoryError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let question = params.question.trim();
        if question.is_empty() {
            return Err(RegulatoryError::InvalidParams {
                message: "question must not be empty".into(),
            });
        }
        let max_results = params
            .max_results
            .unwrap_or(prompts::CONTEXT_DOCS)
            .clamp(1, prompts::CONTEXT_DOCS);

        // The question itself is the retrieval query
        let mut results = search::search(&self.store, question, None)?;
        results.truncate(max_results);

        let context = prompts::build_context(&results);
        let answer_request = AnswerRequest {
            system: prompts::SYSTEM_PROMPT.to_string(),
            prompt: prompts::build_question_prompt(question, &context),
            max_tokens: self.config.system.answer_max_tokens,
        };

        let url_map = UrlMap::from_store(&self.store);
        let related: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                json!({
                    "framework": r.framework,
                    "id": r.id,
                    "title": r.title,
                    "link": format_reference_link(url_map.as_ref(), r.framework, &r.id, &r.title),
                })
            })
            .collect();

        // Service failure becomes a result payload, never a crash
        match self.answerer.answer(&answer_request).await {
            Ok(answer) => {
                tracing::info!(
                    "ask_regulations answered with {} related document(s)",
                    related.len()
                );
                Ok(CallToolResult::structured(json!({
                    "status": "ok",
                    "answer": answer,
                    "model": self.answerer.model(),
                    "related_documents": related,
                })))
            }
            Err(err) => {
                tracing::warn!("ask_regulations answering service failed: {}", err);
                Ok(CallToolResult::structured(json!({
                    "status": "error",
                    "message": format!("Answering service failed: {}", err),
                    "related_documents": related,
                })))
            }
        }
    }
}
