//! Domain layer for dual-model-coordinator
//!
//! This crate contains the core value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Categories and the registry
//!
//! Every question is answered by one of two backend models:
//!
//! - **general**: explanations, comparisons, synthesis
//! - **code**: implementation details and code samples
//!
//! The [`ModelRegistry`] maps each [`ModelCategory`] to a concrete [`Model`].
//! It is built once at startup and shared read-only afterwards.
//!
//! ## Coordination
//!
//! - **Single query**: route a question to one model ([`SingleQueryResult`])
//! - **Dual query**: ask both, then synthesize ([`DualQueryResult`])
//! - **Learning content**: concept → practice → integration ([`LearningContent`])

pub mod config;
pub mod coordination;
pub mod core;
pub mod prompt;
pub mod routing;
pub mod tool;

// Re-export commonly used types
pub use config::OutputFormat;
pub use coordination::{
    entities::Stage,
    value_objects::{
        BackendResponse, DualQueryResult, DualResponses, LEARNING_PATH, LearningComponents,
        LearningContent, ModelAnswer, RECOMMENDATION, SingleQueryResult,
    },
};
pub use core::{
    category::{CategorySelection, ModelCategory},
    error::DomainError,
    model::Model,
    question::{Question, Topic},
    registry::ModelRegistry,
};
pub use prompt::PromptTemplate;
pub use routing::{CODE_KEYWORDS, KeywordClassifier, QuestionClassifier};
pub use tool::{
    ASK_BOTH_MODELS, ASK_SINGLE_MODEL, CREATE_LEARNING_CONTENT, ToolCatalog, ToolDefinition,
    ToolParameter,
};
