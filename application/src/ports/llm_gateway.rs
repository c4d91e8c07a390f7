//! LLM Gateway port
//!
//! Defines the interface for sending a prompt to a completion backend.

use async_trait::async_trait;
use duet_domain::Model;
use thiserror::Error;

/// Errors that can occur during a backend call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Backend returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for text completion
///
/// One call sends one prompt to one model and waits for the complete
/// (non-streamed) answer. Implementations apply their own timeout and make
/// a single attempt.
///
/// Adapters live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, GatewayError>;
}
