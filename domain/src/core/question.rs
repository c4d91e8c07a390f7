//! Question and topic value objects

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to route to one or both models (Value Object)
///
/// The text is kept verbatim (it is embedded into synthesis prompts as-is),
/// but it must contain something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        Ok(Self { content })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

/// Subject of a learning-content request (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic {
    name: String,
}

impl Topic {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TryFrom<String> for Topic {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Topic::new(s)
    }
}

impl TryFrom<&str> for Topic {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Topic::new(s)
    }
}

impl From<Topic> for String {
    fn from(t: Topic) -> Self {
        t.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is Rust?").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_question_keeps_text_verbatim() {
        let q = Question::new("  spaced out?  ").unwrap();
        assert_eq!(q.content(), "  spaced out?  ");
    }

    #[test]
    fn test_empty_question_rejected() {
        assert_eq!(Question::new(""), Err(DomainError::EmptyQuestion));
        assert_eq!(Question::new(" \t\n"), Err(DomainError::EmptyQuestion));
    }

    #[test]
    fn test_question_try_from_str() {
        let q: Question = "What is Rust?".try_into().unwrap();
        assert_eq!(q.to_string(), "What is Rust?");
    }

    #[test]
    fn test_topic_validation() {
        assert_eq!(Topic::new("recursion").unwrap().name(), "recursion");
        assert_eq!(Topic::new("   "), Err(DomainError::EmptyTopic));
    }

    #[test]
    fn test_question_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Question>("\"  \"").is_err());
        let q: Question = serde_json::from_str("\"why?\"").unwrap();
        assert_eq!(q.content(), "why?");
    }
}
