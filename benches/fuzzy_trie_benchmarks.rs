//! Fuzzy Trie Benchmarks
//!
//! Benchmarks for building the trie and for bounded edit-distance queries,
//! using the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use fuzzy_trie_lib::data_structures::fuzzy_trie::{edit_distance, FuzzyTrie, FuzzyTrieConfig};
use std::time::Duration;

/// Deterministic pseudo-words so runs are comparable.
fn vocabulary(size: usize) -> Vec<String> {
    const SYLLABLES: [&str; 16] = [
        "ka", "lo", "mi", "ne", "ru", "sa", "te", "vo", "an", "el", "is", "or", "un", "ba", "di",
        "fu",
    ];
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let syllables = 2 + (state % 4) as usize;
            (0..syllables)
                .map(|i| SYLLABLES[((state >> (i * 4)) & 0xF) as usize])
                .collect()
        })
        .collect()
}

/// Benchmark inserting words into the trie
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_trie_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 50_000].iter() {
        let words = vocabulary(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &words, |b, words| {
            b.iter(|| {
                let trie: FuzzyTrie = words.iter().collect();
                black_box(trie.node_count())
            });
        });
    }

    group.finish();
}

/// Benchmark bounded queries, with and without pruning, against a linear scan
fn bench_search(c: &mut Criterion) {
    let words = vocabulary(50_000);
    let pruned: FuzzyTrie = words.iter().collect();
    let mut exhaustive = FuzzyTrie::with_config(FuzzyTrieConfig::new().prune(false));
    exhaustive.extend(words.iter());

    let query = "kalomine";

    let mut group = c.benchmark_group("fuzzy_trie_search");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(3));

    for max_cost in [0usize, 1, 2, 3].iter() {
        group.bench_with_input(BenchmarkId::new("pruned", max_cost), max_cost, |b, &max_cost| {
            b.iter(|| black_box(pruned.search(black_box(query), max_cost)));
        });
        group.bench_with_input(
            BenchmarkId::new("exhaustive", max_cost),
            max_cost,
            |b, &max_cost| {
                b.iter(|| black_box(exhaustive.search(black_box(query), max_cost)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("linear_scan", max_cost),
            max_cost,
            |b, &max_cost| {
                b.iter(|| {
                    black_box(
                        words
                            .iter()
                            .filter(|w| edit_distance(w, query) <= max_cost)
                            .count(),
                    )
                });
            },
        );
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_insert, bench_search
}

criterion_main!(benches);
