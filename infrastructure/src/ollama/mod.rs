//! Ollama adapter
//!
//! Implements LlmGateway against an Ollama server's `/api/generate` endpoint.

pub mod error;
pub mod gateway;
