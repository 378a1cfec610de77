//! Error types for syncthing-core

use thiserror::Error;

/// Main error type for the Syncthing MCP server
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool arguments were missing or had the wrong type
    #[error("{0}")]
    Validation(String),

    /// Syncthing answered with a non-success status
    #[error("Syncthing API error: {status} {status_text}")]
    Api { status: u16, status_text: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Result type alias for syncthing-core
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status() {
        let err = Error::Api {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Syncthing API error: 500 Internal Server Error");
    }

    #[test]
    fn test_validation_error_is_bare_message() {
        let err = Error::Validation("folder parameter is required".to_string());
        assert_eq!(err.to_string(), "folder parameter is required");
    }

    #[test]
    fn test_unknown_tool_message() {
        let err = Error::UnknownTool("restart".to_string());
        assert_eq!(err.to_string(), "Unknown tool: restart");
    }
}
