//! Ports (interfaces) implemented by outer layers

pub mod llm_gateway;
pub mod progress;
pub mod transcript;
