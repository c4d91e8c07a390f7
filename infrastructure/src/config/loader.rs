//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "dual-model-coordinator";
const PROJECT_FILES: [&str; 2] = ["duet.toml", ".duet.toml"];
const ENV_PREFIX: &str = "DUET_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `DUET_SECTION__KEY` (e.g. `DUET_OLLAMA__BASE_URL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./duet.toml` or `./.duet.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/dual-model-coordinator/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/dual-model-coordinator/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        let env_vars: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        if env_vars.is_empty() {
            println!("  [     ] Env:     {}*", ENV_PREFIX);
        } else {
            println!("  [FOUND] Env:     {}", env_vars.join(", "));
        }

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./duet.toml or ./.duet.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Points the global config directory into the jail so a real user
    /// config cannot leak into the test.
    fn isolate(jail: &mut Jail) {
        let dir = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", dir.display());
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.models.code, "codellama:7b-instruct");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains(APP_DIR));
    }

    #[test]
    fn test_load_without_files_matches_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.ollama.timeout_seconds, 60);
            assert_eq!(config.models.general, "llama3.2:3b");
            Ok(())
        });
    }

    #[test]
    fn test_project_file_merges_over_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "duet.toml",
                r#"
                [models]
                general = "mistral:7b"
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.models.general, "mistral:7b");
            assert_eq!(config.models.code, "codellama:7b-instruct");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(".duet.toml", "[ollama]\ntimeout_seconds = 10\n")?;
            jail.create_file("custom.toml", "[ollama]\ntimeout_seconds = 30\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.ollama.timeout_seconds, 30);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("duet.toml", "[ollama]\nbase_url = \"http://file:1\"\n")?;
            jail.set_env("DUET_OLLAMA__BASE_URL", "http://env:2");
            jail.set_env("DUET_COMPOSITION__PARALLEL_STAGES", "true");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.ollama.base_url, "http://env:2");
            assert!(config.composition.parallel_stages);
            Ok(())
        });
    }

    #[test]
    fn test_zero_timeout_loads_but_fails_validation() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("duet.toml", "[ollama]\ntimeout_seconds = 0\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert!(config.validate().is_err());
            Ok(())
        });
    }
}
