//! Configuration file loading for dual-model-coordinator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DUET_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./duet.toml` or `./.duet.toml`
//! 4. Global: `$XDG_CONFIG_HOME/dual-model-coordinator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCompositionConfig, FileConfig, FileModelsConfig,
    FileOllamaConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
