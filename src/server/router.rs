use crate::server::RegulatoryServer;
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
        InitializeResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo, ToolsCapability,
    },
    service::{RequestContext, RoleServer},
};
use tracing::info;

impl ServerHandler for RegulatoryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "ukgc-regulatory-mcp".to_string(),
                title: Some("UKGC Regulatory Navigator".to_string()),
                version: "0.1.0".to_string(),
                website_url: None,
                icons: None,
            },
            ..Default::default()
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        let mut info = self.get_info();
        info.protocol_version = request.protocol_version.clone();
        Ok(info)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("tools/list requested");

        use rmcp::model::Tool;

        let tools = vec![
            Tool {
                name: "search_regulations".into(),
                title: Some("Search Regulations".into()),
                description: Some(
                    "Search across all regulatory documents (LCCP, ISO 27001, RTS) by keyword"
                        .into(),
                ),
                input_schema: crate::schemas::search_regulations_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "ask_regulations".into(),
                title: Some("Ask Regulations".into()),
                description: Some(
                    "Answer a natural-language question using retrieved regulatory context".into(),
                ),
                input_schema: crate::schemas::ask_regulations_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "get_provision_details".into(),
                title: Some("Provision Details".into()),
                description: Some(
                    "Get detailed information about a specific provision".into(),
                ),
                input_schema: crate::schemas::provision_details_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "get_cross_reference_mapping".into(),
                title: Some("Cross-Reference Mapping".into()),
                description: Some(
                    "Get cross-references between LCCP, ISO 27001, and RTS".into(),
                ),
                input_schema: crate::schemas::cross_reference_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "get_compliance_framework".into(),
                title: Some("Compliance Framework".into()),
                description: Some(
                    "Get framework relationship and integration guidance".into(),
                ),
                input_schema: crate::schemas::compliance_framework_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "verify_compliance".into(),
                title: Some("Verify Compliance".into()),
                description: Some("Get compliance verification checklist".into()),
                input_schema: crate::schemas::verify_compliance_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "browse_framework".into(),
                title: Some("Browse Framework".into()),
                description: Some(
                    "List every extracted provision of one framework with reference links".into(),
                ),
                input_schema: crate::schemas::browse_framework_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
        ];

        Ok(ListToolsResult {
            tools,
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match request.name.as_ref() {
            "search_regulations" => self
                .handle_search_regulations(request)
                .await
                .map_err(|e| e.into()),
            "ask_regulations" => self
                .handle_ask_regulations(request)
                .await
                .map_err(|e| e.into()),
            "get_provision_details" => self
                .handle_provision_details(request)
                .await
                .map_err(|e| e.into()),
            "get_cross_reference_mapping" => self
                .handle_cross_reference(request)
                .await
                .map_err(|e| e.into()),
            "get_compliance_framework" => self
                .handle_compliance_framework(request)
                .await
                .map_err(|e| e.into()),
            "verify_compliance" => self
                .handle_verify_compliance(request)
                .await
                .map_err(|e| e.into()),
            "browse_framework" => self
                .handle_browse_framework(request)
                .await
                .map_err(|e| e.into()),
            _ => Err(McpError {
                code: rmcp::model::ErrorCode::METHOD_NOT_FOUND,
                message: format!("Unknown tool: {}", request.name).into(),
                data: None,
            }),
        }
    }
}
