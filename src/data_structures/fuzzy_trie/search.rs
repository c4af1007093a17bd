// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pruned depth-first traversal that carries one Levenshtein DP row per level.
//!
//! Every trie level extends the parent's row by one candidate character, so
//! words sharing a prefix share the rows computed for that prefix. A subtree
//! is skipped once every entry of its row exceeds the cost bound.

use std::rc::Rc;

use super::node::TrieNode;
use super::Match;

/// Counters collected while traversing the trie for one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of nodes for which a DP row was computed
    pub nodes_visited: usize,

    /// Number of nodes whose children were skipped by the prune
    pub subtrees_pruned: usize,
}

/// Per-query state for one traversal.
pub(super) struct Traversal<'q> {
    query: &'q [char],
    max_cost: usize,
    prune: bool,
    matches: Vec<Match>,
    stats: SearchStats,
}

/// A node waiting to be visited, with the row of its parent prefix.
struct Pending<'t> {
    node: &'t TrieNode,
    letter: char,
    parent_row: Rc<[usize]>,
}

impl<'q> Traversal<'q> {
    pub(super) fn new(query: &'q [char], max_cost: usize, prune: bool) -> Self {
        Self {
            query,
            max_cost,
            prune,
            matches: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Searches every word below `root`, including a word stored at the root.
    ///
    /// Depth-first over an explicit stack; siblings hold the same parent row
    /// and each computes its own row from it.
    pub(super) fn run(mut self, root: &TrieNode) -> (Vec<Match>, SearchStats) {
        let first_row: Rc<[usize]> = (0..=self.query.len()).collect();

        // Only the empty string can end at the root; its cost is the query length.
        if let Some(word) = &root.word {
            if self.query.len() <= self.max_cost {
                self.matches.push(Match::new(word.clone(), self.query.len()));
            }
        }

        let mut stack: Vec<Pending<'_>> = Vec::new();
        push_children(&mut stack, root, &first_row);

        while let Some(Pending {
            node,
            letter,
            parent_row,
        }) = stack.pop()
        {
            if let Some(row) = self.visit(node, letter, &parent_row) {
                push_children(&mut stack, node, &row);
            }
        }

        (self.matches, self.stats)
    }

    /// Computes the row for `node`, records a match, and returns the row when
    /// the children still need visiting.
    fn visit(
        &mut self,
        node: &TrieNode,
        letter: char,
        previous_row: &[usize],
    ) -> Option<Rc<[usize]>> {
        self.stats.nodes_visited += 1;

        let current_row = next_row(self.query, letter, previous_row);
        let cost = current_row[current_row.len() - 1];

        if cost <= self.max_cost {
            if let Some(word) = &node.word {
                self.matches.push(Match::new(word.clone(), cost));
            }
        }

        if node.children.is_empty() {
            return None;
        }

        let row_min = current_row.iter().copied().min().unwrap_or(cost);
        if self.prune && row_min > self.max_cost {
            self.stats.subtrees_pruned += 1;
            return None;
        }

        Some(current_row.into())
    }
}

fn push_children<'t>(stack: &mut Vec<Pending<'t>>, node: &'t TrieNode, row: &Rc<[usize]>) {
    stack.extend(node.children.iter().map(|(&letter, child)| Pending {
        node: child,
        letter,
        parent_row: Rc::clone(row),
    }));
}

/// Builds the DP row for `letter` appended to the prefix behind `previous_row`.
///
/// The returned row is freshly allocated; `previous_row` is never modified, so
/// sibling subtrees all start from the same parent row.
fn next_row(query: &[char], letter: char, previous_row: &[usize]) -> Vec<usize> {
    let mut row = Vec::with_capacity(previous_row.len());
    row.push(previous_row[0] + 1);

    for (column, &query_char) in query.iter().enumerate() {
        let insert_cost = row[column] + 1;
        let delete_cost = previous_row[column + 1] + 1;
        let replace_cost = if query_char == letter {
            previous_row[column]
        } else {
            previous_row[column] + 1
        };
        row.push(insert_cost.min(delete_cost).min(replace_cost));
    }

    row
}
