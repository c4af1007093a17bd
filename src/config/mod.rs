//! Configuration module for the fuzzy trie command-line driver.
//!
//! Settings are layered: built-in defaults first, then an optional file
//! (TOML, YAML, JSON), then environment variables. The merged result is
//! validated before use.

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod dictionary;
pub mod search;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "fuzzy_trie.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "FUZZY_TRIE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FuzzyConfig {
    /// Dictionary loading options
    pub dictionary: dictionary::DictionaryConfig,

    /// Search defaults
    pub search: search::SearchConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for FuzzyConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.search.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(FuzzyConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<FuzzyConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&FuzzyConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let fuzzy_config: FuzzyConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        fuzzy_config.validate()?;

        tracing::debug!(path = ?self.config_path, "Configuration loaded");

        Ok(fuzzy_config)
    }
}

/// Process-wide configuration, set once after loading.
static GLOBAL_CONFIG: OnceCell<Arc<FuzzyConfig>> = OnceCell::new();

/// Installs the process-wide configuration.
///
/// Only the first call takes effect; later calls log a warning and return
/// the configuration that is already installed.
pub fn init_global_config(config: FuzzyConfig) -> Arc<FuzzyConfig> {
    let mut fresh = Some(config);
    let installed = GLOBAL_CONFIG.get_or_init(|| Arc::new(fresh.take().unwrap_or_default()));
    if fresh.is_some() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
    Arc::clone(installed)
}

/// Returns the process-wide configuration, if one has been installed.
pub fn global_config() -> Option<Arc<FuzzyConfig>> {
    GLOBAL_CONFIG.get().cloned()
}
