//! Category-to-model configuration from TOML (`[models]` section)

use super::ConfigValidationError;
use duet_domain::{Model, ModelRegistry};
use serde::{Deserialize, Serialize};

/// Model identifiers per category
///
/// # Example
///
/// ```toml
/// [models]
/// general = "llama3.2:3b"            # explanations and synthesis
/// code = "codellama:7b-instruct"     # implementation details
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub general: String,
    pub code: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            general: Model::DEFAULT_GENERAL.to_string(),
            code: Model::DEFAULT_CODE.to_string(),
        }
    }
}

impl FileModelsConfig {
    /// Build the registry, rejecting blank identifiers
    pub fn to_registry(&self) -> Result<ModelRegistry, ConfigValidationError> {
        let general = Model::new(&self.general)
            .map_err(|_| ConfigValidationError::EmptyModelName("general".to_string()))?;
        let code = Model::new(&self.code)
            .map_err(|_| ConfigValidationError::EmptyModelName("code".to_string()))?;
        Ok(ModelRegistry::new(general, code))
    }
}
