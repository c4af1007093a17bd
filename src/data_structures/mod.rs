//! Data structures for the fuzzy trie crate.
//!
//! This module contains the in-memory index structures. They perform no
//! I/O and never fail; loading words from files lives in
//! [`crate::dictionary`].

pub mod fuzzy_trie;

// Re-export common data structures
pub use fuzzy_trie::{FuzzyTrie, FuzzyTrieConfig, Match, SearchStats, SharedFuzzyTrie};
