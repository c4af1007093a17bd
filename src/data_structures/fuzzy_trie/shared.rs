// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lock-guarded fuzzy trie for use across threads.
//!
//! Searches take the read lock and run in parallel. Inserts take the write
//! lock, so they are serialized against each other and against searches.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{FuzzyTrie, FuzzyTrieConfig, Match, SearchStats};

/// A cloneable handle to a [`FuzzyTrie`] behind a single-writer lock.
#[derive(Debug, Clone, Default)]
pub struct SharedFuzzyTrie {
    inner: Arc<RwLock<FuzzyTrie>>,
}

impl SharedFuzzyTrie {
    /// Creates a new empty shared trie with default configuration.
    pub fn new() -> Self {
        Self::from_trie(FuzzyTrie::new())
    }

    /// Creates a new empty shared trie with the specified configuration.
    pub fn with_config(config: FuzzyTrieConfig) -> Self {
        Self::from_trie(FuzzyTrie::with_config(config))
    }

    /// Wraps an already built trie.
    pub fn from_trie(trie: FuzzyTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts a word under the write lock.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before.
    pub fn insert<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.write().insert(word)
    }

    /// Searches under the read lock.
    pub fn search<Q: AsRef<str>>(&self, query: Q, max_cost: usize) -> Vec<Match> {
        self.inner.read().search(query, max_cost)
    }

    /// Searches under the read lock, also reporting traversal counters.
    pub fn search_with_stats<Q: AsRef<str>>(
        &self,
        query: Q,
        max_cost: usize,
    ) -> (Vec<Match>, SearchStats) {
        self.inner.read().search_with_stats(query, max_cost)
    }

    /// Checks whether `word` was inserted exactly.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.read().contains(word)
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a copy of the current trie, detached from the lock.
    pub fn snapshot(&self) -> FuzzyTrie {
        self.inner.read().clone()
    }
}

impl From<FuzzyTrie> for SharedFuzzyTrie {
    fn from(trie: FuzzyTrie) -> Self {
        Self::from_trie(trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    /// Writers and readers run at once; every inserted word must be
    /// findable at distance zero once all writers have joined.
    #[test]
    fn test_shared_trie_concurrency() {
        const THREAD_COUNT: usize = 8;
        const OPS_PER_THREAD: usize = 50;

        let trie = SharedFuzzyTrie::new();
        let barrier = Arc::new(std::sync::Barrier::new(THREAD_COUNT * 2));

        let mut handles = Vec::with_capacity(THREAD_COUNT * 2);
        for thread_id in 0..THREAD_COUNT {
            let writer = trie.clone();
            let start = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                start.wait();
                for j in 0..OPS_PER_THREAD {
                    assert!(writer.insert(format!("word{thread_id}x{j}")));
                }
            }));

            let reader = trie.clone();
            let start = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                start.wait();
                for j in 0..OPS_PER_THREAD {
                    for found in reader.search(format!("word{thread_id}x{j}"), 1) {
                        assert!(edit_distance_ok(&found, &format!("word{thread_id}x{j}")));
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trie.len(), THREAD_COUNT * OPS_PER_THREAD);
        for thread_id in 0..THREAD_COUNT {
            for j in 0..OPS_PER_THREAD {
                let word = format!("word{thread_id}x{j}");
                assert_eq!(trie.search(&word, 0), vec![Match::new(word.clone(), 0)]);
            }
        }
    }

    fn edit_distance_ok(found: &Match, query: &str) -> bool {
        super::super::edit_distance(&found.word, query) == found.cost && found.cost <= 1
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedFuzzyTrie::new();
        shared.insert("alpha");
        let snapshot = shared.snapshot();
        shared.insert("alphb");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(shared.len(), 2);
        assert!(!snapshot.contains("alphb"));
        assert!(shared.contains("alphb"));
    }

    #[test]
    fn test_snapshot_of_long_word() {
        let shared = SharedFuzzyTrie::with_config(FuzzyTrieConfig::new().prune(false));
        shared.insert("q".repeat(200_000));
        let snapshot = shared.snapshot();

        assert_eq!(snapshot.node_count(), 200_001);
        assert!(snapshot.search("q", 0).is_empty());
        drop(snapshot);
        drop(shared);
    }
}
