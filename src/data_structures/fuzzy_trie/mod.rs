// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fuzzy Trie: approximate word lookup by Levenshtein distance.
//!
//! Words are stored in a prefix tree with one node per character. A query
//! walks the tree once, extending a single row of the Wagner-Fischer table
//! per level, so the edit-distance work for a shared prefix is done once for
//! every word below it. Branches whose row already exceeds the cost bound are
//! skipped entirely.
//!
//! # Example
//!
//! ```
//! use fuzzy_trie_lib::data_structures::fuzzy_trie::{FuzzyTrie, Match};
//!
//! let mut trie = FuzzyTrie::new();
//! trie.insert("sangeet");
//! trie.insert("levenshtein");
//!
//! assert_eq!(trie.search("sanjeet", 1), vec![Match::new("sangeet", 1)]);
//! assert_eq!(trie.search("lavenstein", 2), vec![Match::new("levenshtein", 2)]);
//! assert!(trie.search("sanjeet", 0).is_empty());
//! ```
//!
//! # Performance Characteristics
//!
//! - Insert: O(k) for a word of k chars
//! - Search: O(n * m) where n is the number of nodes within reach of the
//!   bound and m is the query length
//! - Traversal, cloning and dropping use heap stacks, so word length is not
//!   limited by the thread's stack size

mod distance;
mod node;
mod search;
mod shared;

#[cfg(test)]
mod tests;

use std::fmt;

pub use distance::edit_distance;
pub use search::SearchStats;
pub use shared::SharedFuzzyTrie;

use node::TrieNode;
use search::Traversal;

/// Configuration options for the fuzzy trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyTrieConfig {
    /// Skip subtrees whose DP row lies entirely above the cost bound
    pub prune: bool,

    /// Order results by cost, then by word
    pub sort_results: bool,
}

impl Default for FuzzyTrieConfig {
    fn default() -> Self {
        Self {
            prune: true,
            sort_results: true,
        }
    }
}

impl FuzzyTrieConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether unproductive subtrees are pruned.
    pub fn prune(mut self, value: bool) -> Self {
        self.prune = value;
        self
    }

    /// Sets whether results are sorted before being returned.
    pub fn sort_results(mut self, value: bool) -> Self {
        self.sort_results = value;
        self
    }
}

/// A word found by [`FuzzyTrie::search`] together with its edit distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
    /// The indexed word
    pub word: String,

    /// Levenshtein distance between the word and the query
    pub cost: usize,
}

impl Match {
    /// Creates a new match.
    pub fn new<W: Into<String>>(word: W, cost: usize) -> Self {
        Self {
            word: word.into(),
            cost,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.word, self.cost)
    }
}

/// A prefix tree of words answering bounded edit-distance queries.
///
/// Key features:
/// * Exact Levenshtein distances, never approximations
/// * Shared prefixes share their edit-distance computation
/// * Pruning of branches that cannot come back within the bound
///
/// `search` takes `&self`, so a built trie can be searched from many threads
/// at once. Inserting needs `&mut self`; see [`SharedFuzzyTrie`] for a
/// lock-guarded variant.
pub struct FuzzyTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: FuzzyTrieConfig,

    /// Number of distinct words inserted
    word_count: usize,

    /// Number of nodes, including the root
    node_count: usize,
}

impl FuzzyTrie {
    /// Creates a new empty `FuzzyTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(FuzzyTrieConfig::default())
    }

    /// Creates a new empty `FuzzyTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: FuzzyTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            word_count: 0,
            node_count: 1,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &FuzzyTrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Inserting the same word again leaves the trie unchanged. The empty
    /// string is stored at the root.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let mut node = &mut self.root;

        for c in word.chars() {
            let (child, created) = node.child_or_insert(c);
            if created {
                self.node_count += 1;
            }
            node = child;
        }

        let is_new = !node.is_terminal();
        if is_new {
            node.word = Some(word.to_string());
            self.word_count += 1;
        }
        is_new
    }

    /// Returns every word within `max_cost` edits of `query`.
    ///
    /// Each qualifying word appears exactly once, paired with its exact
    /// Levenshtein distance to `query`. Results are ordered by cost and then
    /// word when `sort_results` is enabled; otherwise the order is
    /// unspecified.
    pub fn search<Q>(&self, query: Q, max_cost: usize) -> Vec<Match>
    where
        Q: AsRef<str>,
    {
        self.search_with_stats(query, max_cost).0
    }

    /// Like [`FuzzyTrie::search`], also reporting traversal counters.
    pub fn search_with_stats<Q>(&self, query: Q, max_cost: usize) -> (Vec<Match>, SearchStats)
    where
        Q: AsRef<str>,
    {
        let query = query.as_ref();
        let query_chars: Vec<char> = query.chars().collect();

        let (mut matches, stats) =
            Traversal::new(&query_chars, max_cost, self.config.prune).run(&self.root);

        if self.config.sort_results {
            matches.sort_unstable_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.word.cmp(&b.word)));
        }

        tracing::debug!(
            query,
            max_cost,
            matches = matches.len(),
            nodes_visited = stats.nodes_visited,
            subtrees_pruned = stats.subtrees_pruned,
            "fuzzy search completed"
        );

        (matches, stats)
    }

    /// Checks whether `word` was inserted exactly.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.root
            .descend(word.as_ref().chars())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

impl Clone for FuzzyTrie {
    /// Rebuilds the copy by reinserting every word, which yields the same
    /// nodes since nodes only ever lie on inserted paths.
    fn clone(&self) -> Self {
        let mut copy = Self::with_config(self.config);
        copy.extend(self.root.words());
        copy
    }
}

impl fmt::Debug for FuzzyTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyTrie")
            .field("config", &self.config)
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count)
            .finish()
    }
}

impl Default for FuzzyTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: AsRef<str>> Extend<W> for FuzzyTrie {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for FuzzyTrie {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
