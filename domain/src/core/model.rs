//! Model value object representing a deployed backend model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a model served by the completion backend (Value Object)
///
/// Ollama-style tags such as `llama3.2:3b` or `codellama:7b-instruct`.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model(String);

impl Model {
    /// Default model for general explanations
    pub const DEFAULT_GENERAL: &'static str = "llama3.2:3b";
    /// Default model for code questions
    pub const DEFAULT_CODE: &'static str = "codellama:7b-instruct";

    /// Create a model identifier, rejecting blank names
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyModel);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Default model for [`ModelCategory::General`](super::category::ModelCategory)
    pub fn default_general() -> Self {
        Self(Self::DEFAULT_GENERAL.to_string())
    }

    /// Default model for [`ModelCategory::Code`](super::category::ModelCategory)
    pub fn default_code() -> Self {
        Self(Self::DEFAULT_CODE.to_string())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::new(s)
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Model::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_parse_and_display() {
        let model: Model = "llama3.2:3b".parse().unwrap();
        assert_eq!(model.as_str(), "llama3.2:3b");
        assert_eq!(model.to_string(), "llama3.2:3b");
    }

    #[test]
    fn test_model_trims_whitespace() {
        let model = Model::new("  codellama:7b-instruct \n").unwrap();
        assert_eq!(model.as_str(), "codellama:7b-instruct");
    }

    #[test]
    fn test_empty_model_rejected() {
        assert_eq!(Model::new(""), Err(DomainError::EmptyModel));
        assert_eq!(Model::new("   "), Err(DomainError::EmptyModel));
    }

    #[test]
    fn test_model_serde_as_plain_string() {
        let model = Model::new("llama3.2:3b").unwrap();
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, "\"llama3.2:3b\"");

        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);

        assert!(serde_json::from_str::<Model>("\"\"").is_err());
    }
}
