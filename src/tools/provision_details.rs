//! Full-document lookup for a single provision

use crate::error::{RegulatoryError, Result};
use crate::framework::Framework;
use crate::server::RegulatoryServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ProvisionDetailsParams {
    pub provision_id: String,
    pub framework: String,
}

impl RegulatoryServer {
    pub async fn handle_provision_details(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| RegulatoryError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: ProvisionDetailsParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                RegulatoryError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let framework: Framework = params.framework.parse()?;
        let provision_id = params.provision_id.trim();
        if provision_id.is_empty() {
            return Err(RegulatoryError::InvalidParams {
                message: "provision_id must not be empty".into(),
            });
        }

        match self.store.find_document(framework, provision_id) {
            Some(doc) => {
                let matched: Vec<&crate::extract::Provision> = doc
                    .provisions
                    .iter()
                    .filter(|p| p.id == provision_id)
                    .collect();
                Ok(CallToolResult::structured(json!({
                    "status": "ok",
                    "framework": framework,
                    "provision_id": provision_id,
                    "source": doc.filename,
                    "matched_provisions": matched,
                    "document": doc.raw,
                })))
            }
            None => Ok(CallToolResult::structured(json!({
                "status": "not_found",
                "message": format!("Provision {} not found in {}", provision_id, framework.tag()),
            }))),
        }
    }
}
