//! Search configuration module.
//!
//! This module defines the defaults applied to queries issued from the
//! command line.

use super::{ConfigResult, Validate};
use crate::data_structures::FuzzyTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest edit distance accepted as a default bound.
pub const MAX_COST_LIMIT: usize = 64;

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Edit distance bound used when none is given on the command line
    pub max_cost: usize,

    /// Whether to skip subtrees that cannot come back within the bound
    pub prune: bool,

    /// Whether to order results by cost, then word
    pub sort_results: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_cost: 1,
            prune: true,
            sort_results: true,
        }
    }
}

impl SearchConfig {
    /// Builds the trie options described by this section.
    pub fn trie_config(&self) -> FuzzyTrieConfig {
        FuzzyTrieConfig::new()
            .prune(self.prune)
            .sort_results(self.sort_results)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_cost > MAX_COST_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_cost".to_string(),
                message: format!("must be at most {MAX_COST_LIMIT}, got {}", self.max_cost),
            });
        }

        Ok(())
    }
}
