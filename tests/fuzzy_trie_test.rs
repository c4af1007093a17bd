// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the fuzzy trie public API.
//! Builds an index the way the command-line driver does and checks it
//! against a linear scan with the standalone distance.

use std::collections::BTreeSet;
use std::io::Cursor;
use std::thread;

use fuzzy_trie_lib::config::dictionary::DictionaryConfig;
use fuzzy_trie_lib::data_structures::fuzzy_trie::{
    edit_distance, FuzzyTrie, FuzzyTrieConfig, Match, SharedFuzzyTrie,
};
use fuzzy_trie_lib::dictionary::DictionaryLoader;

const WORDS: &str = "\
levenshtein
lavender
levitate
sangeet
sanjay
sang
singe
sage
stage
sting
string
strong
wrong
";

fn build(config: FuzzyTrieConfig) -> FuzzyTrie {
    let mut trie = FuzzyTrie::with_config(config);
    DictionaryLoader::new(DictionaryConfig::default())
        .load_from_reader(Cursor::new(WORDS), &mut trie)
        .unwrap();
    trie
}

fn linear_scan(query: &str, max_cost: usize) -> BTreeSet<Match> {
    WORDS
        .lines()
        .filter_map(|word| {
            let cost = edit_distance(word, query);
            (cost <= max_cost).then(|| Match::new(word, cost))
        })
        .collect()
}

#[test]
fn test_worked_examples() {
    let trie = build(FuzzyTrieConfig::default());

    assert_eq!(trie.search("sanjeet", 1), vec![Match::new("sangeet", 1)]);
    assert_eq!(trie.search("lavenstein", 2), vec![Match::new("levenshtein", 2)]);
}

#[test]
fn test_against_linear_scan() {
    let pruned = build(FuzzyTrieConfig::default());
    let exhaustive = build(FuzzyTrieConfig::new().prune(false).sort_results(false));

    for query in ["sang", "strng", "wrong", "levitation", "", "xyz", "stinger"] {
        for max_cost in 0..=4 {
            let expected = linear_scan(query, max_cost);

            let found: BTreeSet<Match> = pruned.search(query, max_cost).into_iter().collect();
            assert_eq!(found, expected, "pruned query={query} max_cost={max_cost}");

            let found: BTreeSet<Match> = exhaustive.search(query, max_cost).into_iter().collect();
            assert_eq!(found, expected, "exhaustive query={query} max_cost={max_cost}");
        }
    }
}

#[test]
fn test_concurrent_readers_and_writer() {
    let shared = SharedFuzzyTrie::from(build(FuzzyTrieConfig::default()));
    let extra = ["strang", "strung", "stringy"];

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for word in extra {
                shared.insert(word);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..20 {
                    let results = shared.search("sang", 1);
                    assert!(results.contains(&Match::new("sang", 0)));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let frozen = shared.snapshot();
    assert_eq!(frozen.len(), WORDS.lines().count() + extra.len());
    let words: BTreeSet<String> = frozen.search("string", 1).into_iter().map(|m| m.word).collect();
    assert!(words.contains("stringy"));
    assert!(words.contains("strung"));
    assert!(words.contains("sting"));
}
