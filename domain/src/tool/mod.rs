//! Tool domain module
//!
//! The coordinator exposes exactly three operations to external callers.
//! This module holds their names, descriptions and argument schemas; the
//! application layer dispatches calls and the infrastructure layer serves
//! them over a transport.
//!
//! | Tool | Arguments | Result |
//! |------|-----------|--------|
//! | `ask_single_model` | `question`, `model_type?` | [`SingleQueryResult`] |
//! | `ask_both_models` | `question` | [`DualQueryResult`] |
//! | `create_learning_content` | `topic` | [`LearningContent`] |
//!
//! [`SingleQueryResult`]: crate::SingleQueryResult
//! [`DualQueryResult`]: crate::DualQueryResult
//! [`LearningContent`]: crate::LearningContent

pub mod entities;

pub use entities::{ToolDefinition, ToolParameter};

pub const ASK_SINGLE_MODEL: &str = "ask_single_model";
pub const ASK_BOTH_MODELS: &str = "ask_both_models";
pub const CREATE_LEARNING_CONTENT: &str = "create_learning_content";

/// Ordered list of the tools the coordinator serves
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<ToolDefinition>,
}

impl ToolCatalog {
    /// The three coordinator tools, in listing order
    pub fn coordinator() -> Self {
        let tools = vec![
            ToolDefinition::new(
                ASK_SINGLE_MODEL,
                "Ask a single AI model (auto-selects best model or specify type)",
            )
            .with_parameter(ToolParameter::new("question", "The question to ask", true))
            .with_parameter(
                ToolParameter::new(
                    "model_type",
                    "Which model to use (auto = smart routing)",
                    false,
                )
                .with_allowed_values(["general", "code", "auto"])
                .with_default("auto"),
            ),
            ToolDefinition::new(
                ASK_BOTH_MODELS,
                "Ask both models and get comparative analysis",
            )
            .with_parameter(ToolParameter::new(
                "question",
                "The question to ask both models",
                true,
            )),
            ToolDefinition::new(
                CREATE_LEARNING_CONTENT,
                "Create comprehensive learning content using both models",
            )
            .with_parameter(ToolParameter::new(
                "topic",
                "The topic to create learning content for",
                true,
            )),
        ];

        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::coordinator()
    }
}
