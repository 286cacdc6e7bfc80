//! Cross-reference lookup between the three frameworks

use crate::crossref::{self, CrossRefOutcome};
use crate::error::{RegulatoryError, Result};
use crate::framework::Framework;
use crate::server::RegulatoryServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CrossReferenceParams {
    pub provision_id: String,
    #[serde(default)]
    pub framework: Option<String>,
}

impl RegulatoryServer {
    pub async fn handle_cross_reference(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| RegulatoryError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: CrossReferenceParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                RegulatoryError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let framework = match params.framework.as_deref() {
            Some(raw) => raw.parse()?,
            None => Framework::Lccp,
        };

        match crossref::resolve(&self.store, framework, &params.provision_id) {
            CrossRefOutcome::Found(entry) => Ok(CallToolResult::structured(json!({
                "status": "ok",
                "provision_id": entry.id,
                "title": entry.title,
                "iso27001_controls": entry.iso27001_controls,
                "rts_chapters": entry.rts_chapters,
            }))),
            CrossRefOutcome::NotFound => Ok(CallToolResult::structured(json!({
                "status": "not_found",
                "message": format!(
                    "Provision {} not found in cross-reference mapping",
                    params.provision_id
                ),
            }))),
            CrossRefOutcome::Unavailable => Ok(CallToolResult::structured(json!({
                "status": "unavailable",
                "message": "Cross-reference mapping not loaded",
            }))),
        }
    }
}
