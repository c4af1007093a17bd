//! Test modules for the fuzzy trie crate.
//!
//! Unit tests for the trie live beside it in `data_structures`; this module
//! holds tests for the surrounding layers:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Dictionary loading
//! - Shared fixtures and proptest strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{vocabulary_strategy, word_strategy, TestFixture};
