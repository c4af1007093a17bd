// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the fuzzy trie.
//!
//! Each node stands for one character position along the inserted words.
//! A node owns its children outright, so the whole tree is released when
//! the root is dropped. Word length is unbounded, so nothing here recurses
//! along the depth of the tree.

use std::fmt;

use fnv::FnvHashMap;

/// A node in the fuzzy trie.
///
/// Terminal nodes carry the complete word that ends at them.
#[derive(Default)]
pub struct TrieNode {
    /// Map of characters to child nodes
    pub children: FnvHashMap<char, TrieNode>,

    /// The word ending exactly at this node, if any
    pub word: Option<String>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some inserted word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Returns the child reached by `c`, creating it when missing.
    ///
    /// The boolean is `true` if a new node was allocated.
    pub fn child_or_insert(&mut self, c: char) -> (&mut TrieNode, bool) {
        let mut created = false;
        let child = self.children.entry(c).or_insert_with(|| {
            created = true;
            TrieNode::new()
        });
        (child, created)
    }

    /// Follows `chars` from this node without creating anything.
    pub fn descend<I>(&self, chars: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = char>,
    {
        chars
            .into_iter()
            .try_fold(self, |node, c| node.children.get(&c))
    }

    /// Returns every word stored at or below this node, in no particular order.
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Some(word) = &node.word {
                words.push(word.as_str());
            }
            stack.extend(node.children.values());
        }
        words
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach descendants onto a heap stack so each node is freed with
        // no children left.
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("children", &self.children.len())
            .field("word", &self.word)
            .finish()
    }
}
