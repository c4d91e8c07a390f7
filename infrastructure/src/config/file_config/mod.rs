//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain and application
//! types at startup.

mod models;
mod output;

pub use models::FileModelsConfig;
pub use output::FileOutputConfig;

use duet_application::CoordinatorParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("ollama.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("ollama.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("models.{0}: model name cannot be empty")]
    EmptyModelName(String),
}

/// Ollama backend settings (`[ollama]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Server root, e.g. `http://localhost:11434`
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileOllamaConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Learning-content pipeline settings (`[composition]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompositionConfig {
    /// Run the concept and practice stages concurrently
    pub parallel_stages: bool,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection
    pub ollama: FileOllamaConfig,
    /// Category-to-model mapping
    pub models: FileModelsConfig,
    /// Learning pipeline knobs
    pub composition: FileCompositionConfig,
    /// CLI output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.ollama.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.ollama.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        self.models.to_registry().map(|_| ())
    }

    pub fn coordinator_params(&self) -> CoordinatorParams {
        CoordinatorParams::default().with_parallel_stages(self.composition.parallel_stages)
    }
}
