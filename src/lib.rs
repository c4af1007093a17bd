//! Fuzzy Trie Library
//!
//! This library indexes a vocabulary of words into a prefix tree and answers
//! approximate-match queries: every indexed word within a given Levenshtein
//! distance of a query, together with that distance.
//!
//! # Architecture
//!
//! - [`data_structures::fuzzy_trie`] holds the index and the pruned search.
//!   It performs no I/O and cannot fail.
//! - [`dictionary`] reads word lists into a trie.
//! - [`config`] and [`error`] support the command-line driver.
//!
//! # Example
//!
//! ```
//! use fuzzy_trie_lib::data_structures::{FuzzyTrie, Match};
//!
//! let trie: FuzzyTrie = ["apple", "apply", "ample"].into_iter().collect();
//! let matches = trie.search("appel", 2);
//! assert_eq!(matches[0], Match::new("apple", 2));
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
