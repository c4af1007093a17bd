//! Dictionary configuration module.
//!
//! This module defines where the word list is read from and how each line
//! is normalized before insertion.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default word list shipped by most Unix systems.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Path to a newline-separated word list
    pub path: PathBuf,

    /// Whether to lowercase every word before insertion
    pub lowercase: bool,

    /// Whether lines starting with `#` are ignored
    pub skip_comments: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            lowercase: false,
            skip_comments: false,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
