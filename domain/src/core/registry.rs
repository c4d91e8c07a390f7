//! Category → model mapping

use super::category::ModelCategory;
use super::model::Model;
use serde::{Deserialize, Serialize};

/// Immutable mapping from [`ModelCategory`] to the backend [`Model`] serving it
///
/// Built once at startup and shared by reference; there is no way to
/// mutate it after construction. Every category always has a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRegistry {
    general: Model,
    code: Model,
}

impl ModelRegistry {
    pub fn new(general: Model, code: Model) -> Self {
        Self { general, code }
    }

    /// Model serving the given category
    pub fn model_for(&self, category: ModelCategory) -> &Model {
        match category {
            ModelCategory::General => &self.general,
            ModelCategory::Code => &self.code,
        }
    }

    pub fn general(&self) -> &Model {
        &self.general
    }

    pub fn code(&self) -> &Model {
        &self.code
    }

    /// All models in registry order (general, code)
    pub fn models(&self) -> Vec<&Model> {
        ModelCategory::ALL
            .iter()
            .map(|c| self.model_for(*c))
            .collect()
    }

    /// Model identifiers in registry order
    pub fn model_ids(&self) -> Vec<String> {
        self.models().into_iter().map(|m| m.to_string()).collect()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self {
            general: Model::default_general(),
            code: Model::default_code(),
        }
    }
}
