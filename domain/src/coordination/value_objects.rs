//! Coordination value objects - immutable result types.
//!
//! - [`BackendResponse`] - outcome of one backend call, text or in-band error
//! - [`SingleQueryResult`] - one routed answer
//! - [`DualQueryResult`] - both answers plus a synthesis
//! - [`LearningContent`] - concept, practice and integrated guide
//!
//! The serialized field names are the wire shape returned to tool callers.

use crate::core::category::ModelCategory;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Fixed recommendation attached to every [`DualQueryResult`]
pub const RECOMMENDATION: &str = "Use both responses for comprehensive understanding";

/// Fixed pipeline-order descriptor attached to every [`LearningContent`]
pub const LEARNING_PATH: &str = "Concept → Practice → Integration";

/// Outcome of a single backend call
///
/// Failures are carried as values so that a fan-out never aborts its
/// sibling calls. Either a text payload or an error message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum BackendResponse {
    Text(String),
    Error(String),
}

impl BackendResponse {
    /// Substituted when the backend answers without a response field
    pub const NO_RESPONSE: &'static str = "No response received";

    pub fn text(text: impl Into<String>) -> Self {
        BackendResponse::Text(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        BackendResponse::Error(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BackendResponse::Text(_))
    }

    /// Text shown to users and embedded into follow-up prompts.
    ///
    /// Errors render as `Error: <message>`.
    pub fn display_text(&self) -> String {
        match self {
            BackendResponse::Text(text) => text.clone(),
            BackendResponse::Error(message) => format!("Error: {}", message),
        }
    }

    pub fn into_display_text(self) -> String {
        match self {
            BackendResponse::Text(text) => text,
            BackendResponse::Error(message) => format!("Error: {}", message),
        }
    }
}

/// Answer from a single routed query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleQueryResult {
    /// Model identifier that answered
    pub model_used: Model,
    /// Resolved category, never `auto`
    pub model_type: ModelCategory,
    /// Response text (or `Error: ...`)
    pub response: String,
    /// Why this category was picked
    pub routing_reason: String,
}

impl SingleQueryResult {
    pub fn new(model: Model, category: ModelCategory, response: BackendResponse) -> Self {
        Self {
            model_used: model,
            model_type: category,
            response: response.into_display_text(),
            routing_reason: format!("Selected {} model for this type of question", category),
        }
    }
}

/// A model's answer inside a [`DualQueryResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAnswer {
    pub model: Model,
    pub response: String,
}

impl ModelAnswer {
    pub fn new(model: Model, response: BackendResponse) -> Self {
        Self {
            model,
            response: response.into_display_text(),
        }
    }
}

/// Both raw answers of a dual query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualResponses {
    pub general_model: ModelAnswer,
    pub code_model: ModelAnswer,
}

/// Result of asking both models and synthesizing their answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualQueryResult {
    /// The original question
    pub question: String,
    /// Raw answers of both models
    pub responses: DualResponses,
    /// Comparison written by the general model
    pub synthesis: String,
    /// Always [`RECOMMENDATION`]
    pub recommendation: String,
}

impl DualQueryResult {
    pub fn new(
        question: impl Into<String>,
        general: ModelAnswer,
        code: ModelAnswer,
        synthesis: BackendResponse,
    ) -> Self {
        Self {
            question: question.into(),
            responses: DualResponses {
                general_model: general,
                code_model: code,
            },
            synthesis: synthesis.into_display_text(),
            recommendation: RECOMMENDATION.to_string(),
        }
    }

    pub fn general_response(&self) -> &str {
        &self.responses.general_model.response
    }

    pub fn code_response(&self) -> &str {
        &self.responses.code_model.response
    }
}

/// The three texts produced by the learning pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningComponents {
    pub concept: String,
    pub practice: String,
    pub integrated: String,
}

/// Learning material composed from both models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningContent {
    pub topic: String,
    pub learning_components: LearningComponents,
    /// Always [`LEARNING_PATH`]
    pub learning_path: String,
    /// Model identifiers invoked, in registry order
    pub models_used: Vec<String>,
}

impl LearningContent {
    pub fn new(
        topic: impl Into<String>,
        concept: BackendResponse,
        practice: BackendResponse,
        integrated: BackendResponse,
        models_used: Vec<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            learning_components: LearningComponents {
                concept: concept.into_display_text(),
                practice: practice.into_display_text(),
                integrated: integrated.into_display_text(),
            },
            learning_path: LEARNING_PATH.to_string(),
            models_used,
        }
    }
}
