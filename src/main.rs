//! MCP server entry point: regulatory document store over stdio transport

use anyhow::Result;
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use ukgc_regulatory_mcp::{config::Config, server::RegulatoryServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration using the typed config system
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Initialize tracing with configurable log level
    tracing_subscriber::fmt()
        .with_env_filter(config.runtime.log_level.clone())
        .with_ansi(false)
        .init();

    info!("🚀 Starting UKGC Regulatory MCP Server");
    info!(
        "📊 Configuration loaded: documents_path={}, answer_provider={}",
        config.system.documents_path, config.system.answer_provider
    );

    let (server, report) = RegulatoryServer::new(config).map_err(|e| {
        eprintln!("Failed to create server: {}", e);
        e
    })?;

    for (framework, count) in &report.loaded {
        info!("📚 {}: {} document(s) loaded", framework, count);
    }
    info!("📇 {} index document(s) loaded", report.index_count);
    if !report.warnings.is_empty() {
        info!("⚠️ {} file(s) skipped during load", report.warnings.len());
    }

    info!("✅ Server initialized successfully");
    info!(
        "🛠️  Available tools: search_regulations, ask_regulations, get_provision_details, get_cross_reference_mapping, get_compliance_framework, verify_compliance, browse_framework"
    );

    // Start MCP server with stdio transport
    let service = server.serve(stdio()).await.map_err(|e| {
        eprintln!("Failed to start MCP service: {}", e);
        e
    })?;

    info!("🎯 MCP Server ready - waiting for requests...");
    service.waiting().await?;

    Ok(())
}
