//! Error types for the MCP server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error(transparent)]
    Wellness(#[from] wellness_core::WellnessError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no profile registered")]
    NoProfile,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for McpError {
    fn from(err: String) -> Self {
        McpError::Internal(err)
    }
}

impl From<McpError> for String {
    fn from(err: McpError) -> Self {
        err.to_string()
    }
}

pub type McpResult<T> = Result<T, McpError>;
