// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Standalone Levenshtein distance.
//!
//! Computes the full distance between two strings without touching the
//! trie. It is the oracle the trie search is checked against.

/// Returns the Levenshtein distance between `a` and `b`, counted in chars.
///
/// Insertions, deletions and substitutions each cost one.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitution = if ac == bc { diagonal } else { diagonal + 1 };
            row[j + 1] = (above + 1).min(row[j] + 1).min(substitution);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}
