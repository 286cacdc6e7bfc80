//! Framework-relationship documentation and compliance verification lookups.
//!
//! Both tools serve sections of one index document, the framework
//! relationship documentation, so they live together.

use crate::error::{RegulatoryError, Result};
use crate::server::RegulatoryServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde::Deserialize;
use serde_json::json;

/// Filename stem of the framework-relationship index document.
pub const FRAMEWORK_DOC_INDEX: &str = "framework-relationship-documentation-lccp-iso27001-rts";

#[derive(Debug, Deserialize)]
pub struct ComplianceFrameworkParams {
    #[serde(default)]
    pub query_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyComplianceParams {
    pub requirement_area: String,
}

impl RegulatoryServer {
    pub async fn handle_compliance_framework(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let params: ComplianceFrameworkParams = match request.arguments {
            Some(args) => serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                RegulatoryError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?,
            // Every field is optional, so a missing argument object is fine
            None => ComplianceFrameworkParams { query_type: None },
        };

        let Some(doc) = self.store.index(FRAMEWORK_DOC_INDEX) else {
            return Ok(CallToolResult::structured(json!({
                "status": "unavailable",
                "message": "Framework documentation not available",
            })));
        };

        let query_type = params.query_type.as_deref().unwrap_or("overview");
        let (section, content) = match query_type {
            "overview" => (
                "executive_summary",
                doc.get("executive_summary").cloned().unwrap_or(json!({})),
            ),
            "hierarchy" => (
                "framework_hierarchy_and_relationships",
                doc.get("framework_hierarchy_and_relationships")
                    .cloned()
                    .unwrap_or(json!({})),
            ),
            _ => {
                return Ok(CallToolResult::structured(json!({
                    "status": "ok",
                    "message": "Framework documentation available",
                    "query_types": ["overview", "hierarchy"],
                })));
            }
        };

        Ok(CallToolResult::structured(json!({
            "status": "ok",
            "section": section,
            "content": content,
        })))
    }

    pub async fn handle_verify_compliance(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| RegulatoryError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: VerifyComplianceParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                RegulatoryError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let area = params.requirement_area.trim().to_lowercase();
        if area.is_empty() {
            return Err(RegulatoryError::InvalidParams {
                message: "requirement_area must not be empty".into(),
            });
        }

        let Some(doc) = self.store.index(FRAMEWORK_DOC_INDEX) else {
            return Ok(CallToolResult::structured(json!({
                "status": "unavailable",
                "message": "Framework documentation not available",
            })));
        };

        let checks: Vec<serde_json::Value> = doc
            .get("compliance_verification_matrix")
            .and_then(|m| m.get("verification_approach"))
            .and_then(|v| v.as_array())
            .map(|list| {
                list.iter()
                    .filter(|check| {
                        check
                            .get("requirement")
                            .and_then(|r| r.as_str())
                            .is_some_and(|r| r.to_lowercase().contains(&area))
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if checks.is_empty() {
            return Ok(CallToolResult::structured(json!({
                "status": "not_found",
                "message": format!(
                    "No verification checks found for {}",
                    params.requirement_area
                ),
            })));
        }

        Ok(CallToolResult::structured(json!({
            "status": "ok",
            "requirement_area": params.requirement_area,
            "count": checks.len(),
            "checks": checks,
        })))
    }
}
