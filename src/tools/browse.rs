//! Framework catalogue: every extracted provision with reference links

use crate::error::{RegulatoryError, Result};
use crate::framework::Framework;
use crate::links::{UrlMap, format_reference_link};
use crate::server::RegulatoryServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct BrowseFrameworkParams {
    pub framework: String,
}

impl RegulatoryServer {
    pub async fn handle_browse_framework(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| RegulatoryError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: BrowseFrameworkParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                RegulatoryError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let framework: Framework = params.framework.parse()?;
        let url_map = UrlMap::from_store(&self.store);

        let provisions: Vec<serde_json::Value> = self
            .store
            .documents(framework)
            .iter()
            .flat_map(|doc| {
                let url_map = &url_map;
                doc.provisions.iter().map(move |p| {
                    json!({
                        "id": p.id,
                        "title": p.title,
                        "category": p.category,
                        "kind": p.kind,
                        "source": doc.filename,
                        "link": format_reference_link(url_map.as_ref(), framework, &p.id, &p.title),
                    })
                })
            })
            .collect();

        Ok(CallToolResult::structured(json!({
            "framework": framework,
            "name": framework.full_name(),
            "count": provisions.len(),
            "provisions": provisions,
        })))
    }
}
