//! Application layer for dual-model-coordinator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CoordinatorParams;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    transcript::{NoTranscript, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::ask_both_models::AskBothModelsUseCase;
pub use use_cases::ask_single_model::{AskSingleModelInput, AskSingleModelUseCase};
pub use use_cases::backend_client::BackendClient;
pub use use_cases::create_learning_content::CreateLearningContentUseCase;
pub use use_cases::dispatch_tool::{DispatchToolUseCase, ToolCallError};
