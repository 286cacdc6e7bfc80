//! Keyword search over the regulatory document store

use crate::error::{RegulatoryError, Result};
use crate::framework::Framework;
use crate::links::{UrlMap, format_reference_link};
use crate::search;
use crate::server::RegulatoryServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct SearchRegulationsParams {
    pub query: String,
    #[serde(default)]
    pub framework: Option<String>,
}

impl RegulatoryServer {
    pub async fn handle_search_regulations(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| RegulatoryError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: SearchRegulationsParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                RegulatoryError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let framework = params
            .framework
            .as_deref()
            .map(str::parse::<Framework>)
            .transpose()?;

        let results = search::search(&self.store, &params.query, framework)?;

        let url_map = UrlMap::from_store(&self.store);
        let rendered: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                json!({
                    "framework": r.framework,
                    "id": r.id,
                    "title": r.title,
                    "snippet": r.snippet,
                    "relevance": r.relevance,
                    "score": r.score(),
                    "source": r.filename,
                    "link": format_reference_link(url_map.as_ref(), r.framework, &r.id, &r.title),
                })
            })
            .collect();

        tracing::info!(
            "search_regulations: {} result(s) for '{}'",
            rendered.len(),
            params.query
        );

        Ok(CallToolResult::structured(json!({
            "query": params.query,
            "count": rendered.len(),
            "results": rendered,
        })))
    }
}
