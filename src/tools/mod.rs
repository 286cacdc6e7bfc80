//! Tool handlers for the regulatory MCP server

pub mod ask_regulations;
pub mod browse;
pub mod compliance_framework;
pub mod cross_reference;
pub mod provision_details;
pub mod search_regulations;
