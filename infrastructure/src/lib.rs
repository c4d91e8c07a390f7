//! Infrastructure layer for dual-model-coordinator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading, and the
//! stdio tool server.

pub mod config;
pub mod logging;
pub mod mcp;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCompositionConfig, FileConfig, FileModelsConfig,
    FileOllamaConfig, FileOutputConfig,
};
pub use logging::JsonlTranscriptLogger;
pub use mcp::{error::ServerError, server::McpServer};
pub use ollama::{error::OllamaError, gateway::OllamaGateway};
