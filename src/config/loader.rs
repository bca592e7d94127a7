//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to engine configuration.
///
/// # Example
///
/// ```no_run
/// use call_budget_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?;
/// println!("CV penalty factor: {}", loader.config().fairness.cv_penalty_factor);
/// # Ok::<(), call_budget_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - The fairness penalty factor is negative or not finite
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(&config, &path_str)?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    fn validate(config: &EngineConfig, path: &str) -> EngineResult<()> {
        let factor = config.fairness.cv_penalty_factor;
        if !factor.is_finite() || factor < 0.0 {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "fairness.cv_penalty_factor must be a non-negative number, got {}",
                    factor
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/engine.yaml"
    }

    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "call_budget_engine_{}_{}.yaml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().fairness.cv_penalty_factor, 2.0);
        assert!(loader.config().schedule.use_default_holidays);
    }

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("does_not_exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp_config("invalid", "fairness: [not, a, map");

        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_negative_penalty_factor_is_rejected() {
        let path = write_temp_config("negative", "fairness:\n  cv_penalty_factor: -1.0\n");

        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("cv_penalty_factor"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_seed_is_loaded() {
        let path = write_temp_config("seeded", "schedule:\n  seed: 7\n  use_default_holidays: false\n");

        let loader = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loader.config().schedule.seed, Some(7));
        assert!(!loader.config().schedule.use_default_holidays);
    }

    #[test]
    fn test_default_loader() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config(), &EngineConfig::default());
    }
}
