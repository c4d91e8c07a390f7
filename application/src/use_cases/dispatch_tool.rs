//! Tool dispatch
//!
//! Maps a tool name plus JSON arguments onto one of the three coordinator
//! use cases and serializes the result as pretty-printed JSON. Argument
//! validation happens here, at the transport boundary.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::ask_both_models::AskBothModelsUseCase;
use crate::use_cases::ask_single_model::{AskSingleModelInput, AskSingleModelUseCase};
use crate::use_cases::create_learning_content::CreateLearningContentUseCase;
use duet_domain::{
    ASK_BOTH_MODELS, ASK_SINGLE_MODEL, CREATE_LEARNING_CONTENT, CategorySelection, ModelCategory,
    Question, ToolCatalog, Topic,
};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors returned by [`DispatchToolUseCase::dispatch`]
#[derive(Error, Debug)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Entry point for named tool invocations
#[derive(Clone)]
pub struct DispatchToolUseCase {
    catalog: ToolCatalog,
    single: AskSingleModelUseCase,
    both: AskBothModelsUseCase,
    learning: CreateLearningContentUseCase,
}

impl DispatchToolUseCase {
    pub fn new(
        single: AskSingleModelUseCase,
        both: AskBothModelsUseCase,
        learning: CreateLearningContentUseCase,
    ) -> Self {
        Self {
            catalog: ToolCatalog::coordinator(),
            single,
            both,
            learning,
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Invoke tool `name` with `arguments` and return the pretty JSON result
    pub async fn dispatch(&self, name: &str, arguments: &Value) -> Result<String, ToolCallError> {
        self.dispatch_with_progress(name, arguments, &NoProgress).await
    }

    pub async fn dispatch_with_progress(
        &self,
        name: &str,
        arguments: &Value,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, ToolCallError> {
        debug!("Dispatching tool {} with {}", name, arguments);

        match name {
            ASK_SINGLE_MODEL => {
                let question = Question::new(required_str(arguments, "question")?)
                    .map_err(|e| ToolCallError::InvalidArgument(e.to_string()))?;
                let input = AskSingleModelInput::new(question)
                    .with_selection(selection_argument(arguments));
                let result = self.single.execute_with_progress(input, progress).await;
                Ok(serde_json::to_string_pretty(&result)?)
            }
            ASK_BOTH_MODELS => {
                let question = Question::new(required_str(arguments, "question")?)
                    .map_err(|e| ToolCallError::InvalidArgument(e.to_string()))?;
                let result = self.both.execute_with_progress(question, progress).await;
                Ok(serde_json::to_string_pretty(&result)?)
            }
            CREATE_LEARNING_CONTENT => {
                let topic = Topic::new(required_str(arguments, "topic")?)
                    .map_err(|e| ToolCallError::InvalidArgument(e.to_string()))?;
                let result = self.learning.execute_with_progress(topic, progress).await;
                Ok(serde_json::to_string_pretty(&result)?)
            }
            other => Err(ToolCallError::UnknownTool(other.to_string())),
        }
    }
}

fn required_str<'a>(arguments: &'a Value, key: &str) -> Result<&'a str, ToolCallError> {
    match arguments.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ToolCallError::InvalidArgument(format!(
            "'{}' must be a string",
            key
        ))),
        None => Err(ToolCallError::InvalidArgument(format!(
            "missing required argument '{}'",
            key
        ))),
    }
}

/// Absent or null `model_type` means auto; anything unrecognized means general.
fn selection_argument(arguments: &Value) -> CategorySelection {
    match arguments.get("model_type") {
        None | Some(Value::Null) => CategorySelection::Auto,
        Some(Value::String(s)) => s.parse().unwrap_or_default(),
        Some(_) => CategorySelection::Category(ModelCategory::General),
    }
}
