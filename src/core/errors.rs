//! Custom error types for API operations

use serde_json::Value;
use thiserror::Error;

/// Gengo API client errors
#[derive(Error, Debug)]
pub enum GengoError {
    /// Network, connection, or timeout failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response arrived with a non-success HTTP status
    #[error("Unexpected HTTP status {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// Response body was not valid JSON
    #[error("Could not parse response from Gengo: {body}")]
    Parse {
        body: String,
    },

    /// The service reported an error inside a well-formed envelope
    #[error("API error: {err}")]
    Api {
        err: Value,
    },

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField {
        field: &'static str,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

/// Coarse error classification exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, timeout, or non-success HTTP status
    Transport,
    /// Malformed response body
    Parse,
    /// Logical error reported by the service itself
    Api,
    /// Client-side request construction failure
    Request,
}

impl GengoError {
    /// Classify this error into the transport/parse/api/request taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            GengoError::Transport(_) | GengoError::Status { .. } => ErrorKind::Transport,
            GengoError::Parse { .. } => ErrorKind::Parse,
            GengoError::Api { .. } => ErrorKind::Api,
            GengoError::MissingField { .. }
            | GengoError::Json(_)
            | GengoError::Config { .. } => ErrorKind::Request,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, GengoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_classification() {
        let status = GengoError::Status {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(status.kind(), ErrorKind::Transport);

        let parse = GengoError::Parse {
            body: "not json".to_string(),
        };
        assert_eq!(parse.kind(), ErrorKind::Parse);

        let api = GengoError::Api {
            err: json!("bad job id"),
        };
        assert_eq!(api.kind(), ErrorKind::Api);

        let missing = GengoError::MissingField { field: "id" };
        assert_eq!(missing.kind(), ErrorKind::Request);
    }

    #[test]
    fn test_parse_error_mentions_body() {
        let err = GengoError::Parse {
            body: "<html>gateway</html>".to_string(),
        };
        assert!(err.to_string().contains("<html>gateway</html>"));
    }
}
