//! Domain-specific error types for ukgc-regulatory-mcp

use serde_json::json;
use thiserror::Error;

/// Main error type for the regulatory MCP server
#[derive(Error, Debug)]
pub enum RegulatoryError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Document store error: {message}")]
    Store { message: String },

    #[error("Answering service error: {message}")]
    Answer { message: String },

    #[error("MCP protocol error: {message}")]
    Mcp { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },
}

impl From<anyhow::Error> for RegulatoryError {
    fn from(err: anyhow::Error) -> Self {
        RegulatoryError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RegulatoryError {
    fn from(err: serde_json::Error) -> Self {
        RegulatoryError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RegulatoryError {
    fn from(err: std::io::Error) -> Self {
        RegulatoryError::Store {
            message: err.to_string(),
        }
    }
}

impl From<rmcp::ErrorData> for RegulatoryError {
    fn from(err: rmcp::ErrorData) -> Self {
        RegulatoryError::Mcp {
            message: err.message.to_string(),
        }
    }
}

impl From<reqwest::Error> for RegulatoryError {
    fn from(err: reqwest::Error) -> Self {
        RegulatoryError::Answer {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

/// Convert RegulatoryError to MCP error
impl From<RegulatoryError> for rmcp::ErrorData {
    fn from(err: RegulatoryError) -> Self {
        let (code, label, details) = match err {
            RegulatoryError::Config { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Configuration error",
                message,
            ),
            RegulatoryError::Store { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Document store error",
                message,
            ),
            RegulatoryError::Answer { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Answering service error",
                message,
            ),
            RegulatoryError::Mcp { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "MCP protocol error",
                message,
            ),
            RegulatoryError::Serialization { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Serialization error",
                message,
            ),
            RegulatoryError::Validation { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Validation error",
                message,
            ),
            RegulatoryError::Internal { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Internal error",
                message,
            ),
            RegulatoryError::InvalidParams { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Invalid parameters",
                message,
            ),
        };

        rmcp::ErrorData {
            code,
            message: format!("{label}: {details}").into(),
            data: Some(json!({ "details": details })),
        }
    }
}

/// Result type alias for regulatory server operations
pub type Result<T> = std::result::Result<T, RegulatoryError>;
