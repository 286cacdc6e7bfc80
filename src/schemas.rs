use serde_json::{Map, Value, json};
use std::sync::Arc;

pub fn search_regulations_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "query": {"type": "string", "description": "Keyword or phrase to search for"},
            "framework": {"type": "string", "enum": ["lccp", "iso27001", "rts"], "description": "Restrict the search to one framework"}
        },
        "required": ["query"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn ask_regulations_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "question": {"type": "string", "description": "Natural-language question about UKGC regulations"},
            "max_results": {"type": "integer", "minimum": 1, "maximum": 10, "default": 10}
        },
        "required": ["question"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn provision_details_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "provision_id": {"type": "string", "description": "Provision identifier, e.g. '1.1.1' or 'RTS-12'"},
            "framework": {"type": "string", "enum": ["lccp", "iso27001", "rts"]}
        },
        "required": ["provision_id", "framework"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn cross_reference_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "provision_id": {"type": "string", "description": "LCCP provision identifier to map"},
            "framework": {"type": "string", "enum": ["lccp", "iso27001", "rts"], "default": "lccp"}
        },
        "required": ["provision_id"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn compliance_framework_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "query_type": {"type": "string", "enum": ["overview", "hierarchy"], "default": "overview"}
        }
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn verify_compliance_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "requirement_area": {"type": "string", "description": "Compliance area to verify, e.g. 'customer_funds' or 'age_verification'"}
        },
        "required": ["requirement_area"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn browse_framework_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "framework": {"type": "string", "enum": ["lccp", "iso27001", "rts"]}
        },
        "required": ["framework"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}
