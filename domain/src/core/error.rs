//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Model identifier cannot be empty")]
    EmptyModel,
}
