use serde::{Deserialize, Serialize};
use std::fs;

use super::{ConfigError, LoggingConfig, NamespaceConfig, SourcesConfig};
use crate::AggregationStrategy;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub namespace: NamespaceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub strategy: Option<AggregationStrategy>,
    pub resolv_conf_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `path` when given, otherwise starts from defaults, then applies
    /// the CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
                    path: path.to_string(),
                    source,
                })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(strategy) = overrides.strategy {
            self.sources.strategy = strategy;
        }
        if let Some(path) = overrides.resolv_conf_path {
            self.sources.resolv_conf_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.resolv_conf_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sources.resolv_conf_path must not be empty".to_string(),
            ));
        }

        if self.sources.network_manager_command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sources.network_manager_command must not be empty".to_string(),
            ));
        }

        if self.namespace.nsenter_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "namespace.nsenter_path must not be empty".to_string(),
            ));
        }

        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        Ok(())
    }
}
