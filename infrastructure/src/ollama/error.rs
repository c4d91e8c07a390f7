//! Error types for the Ollama adapter

use duet_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Could not reach {url}: {message}")]
    Connection { url: String, message: String },

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Request(String),
}

impl From<OllamaError> for GatewayError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Timeout(secs) => GatewayError::Timeout(secs),
            OllamaError::Connection { .. } => GatewayError::ConnectionError(err.to_string()),
            OllamaError::Status { status, body } => GatewayError::HttpStatus { status, body },
            OllamaError::Decode(message) => GatewayError::InvalidResponse(message),
            OllamaError::ClientBuild(_) | OllamaError::Request(_) => {
                GatewayError::Other(err.to_string())
            }
        }
    }
}
