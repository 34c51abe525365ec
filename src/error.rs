//! Domain-specific error types for the ai-use-cases MCP server

use serde_json::json;
use thiserror::Error;

/// Main error type for the ai-use-cases MCP server
#[derive(Error, Debug)]
pub enum UseCasesError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Scraping error: {message}")]
    Scraping { message: String },

    #[error("Search error: {message}")]
    Search { message: String },

    #[error("MCP protocol error: {message}")]
    Mcp { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for UseCasesError {
    fn from(err: anyhow::Error) -> Self {
        UseCasesError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for UseCasesError {
    fn from(err: serde_json::Error) -> Self {
        UseCasesError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<rusqlite::Error> for UseCasesError {
    fn from(err: rusqlite::Error) -> Self {
        UseCasesError::Database {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for UseCasesError {
    fn from(err: reqwest::Error) -> Self {
        UseCasesError::Scraping {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<rmcp::ErrorData> for UseCasesError {
    fn from(err: rmcp::ErrorData) -> Self {
        UseCasesError::Mcp {
            message: err.message.to_string(),
        }
    }
}

/// Convert UseCasesError to MCP error
impl From<UseCasesError> for rmcp::ErrorData {
    fn from(err: UseCasesError) -> Self {
        let (code, label, details) = match err {
            UseCasesError::Config { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Configuration error",
                message,
            ),
            UseCasesError::Database { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Database error",
                message,
            ),
            UseCasesError::Scraping { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Scraping error",
                message,
            ),
            UseCasesError::Search { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Search error",
                message,
            ),
            UseCasesError::Mcp { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "MCP protocol error",
                message,
            ),
            UseCasesError::Serialization { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Serialization error",
                message,
            ),
            UseCasesError::Validation { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Validation error",
                message,
            ),
            UseCasesError::Internal { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Internal error",
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

/// Result type alias for ai-use-cases operations
pub type Result<T> = std::result::Result<T, UseCasesError>;
