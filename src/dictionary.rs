//! Word list loading.
//!
//! Reads a newline-separated word list into a [`FuzzyTrie`]. Lines are
//! trimmed and blank lines are skipped; comment skipping and lowercasing
//! follow [`DictionaryConfig`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::{FuzzyTrie, FuzzyTrieConfig};
use crate::error::dictionary::DictionaryError;

/// Counters describing one dictionary load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Lines read from the source
    pub lines_read: usize,

    /// Words that were not already in the trie
    pub words_inserted: usize,

    /// Blank or comment lines that were ignored
    pub lines_skipped: usize,
}

/// Loads word lists into fuzzy tries.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLoader {
    config: DictionaryConfig,
}

impl DictionaryLoader {
    /// Creates a loader with the given options.
    pub fn new(config: DictionaryConfig) -> Self {
        Self { config }
    }

    /// Loads the configured dictionary file into a new trie.
    pub fn load(
        &self,
        trie_config: FuzzyTrieConfig,
    ) -> Result<(FuzzyTrie, DictionaryStats), DictionaryError> {
        let mut trie = FuzzyTrie::with_config(trie_config);
        let stats = self.load_file_into(&self.config.path, &mut trie)?;
        Ok((trie, stats))
    }

    /// Reads the file at `path` and inserts its words into `trie`.
    pub fn load_file_into<P: AsRef<Path>>(
        &self,
        path: P,
        trie: &mut FuzzyTrie,
    ) -> Result<DictionaryStats, DictionaryError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| DictionaryError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let stats = self.load_from_reader(BufReader::new(file), trie)?;
        tracing::info!(
            path = %path.display(),
            lines = stats.lines_read,
            words = stats.words_inserted,
            skipped = stats.lines_skipped,
            "Dictionary loaded"
        );
        Ok(stats)
    }

    /// Inserts every word read from `reader` into `trie`.
    pub fn load_from_reader<R: BufRead>(
        &self,
        reader: R,
        trie: &mut FuzzyTrie,
    ) -> Result<DictionaryStats, DictionaryError> {
        let mut stats = DictionaryStats::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| DictionaryError::from_read(line_number, source))?;
            stats.lines_read += 1;

            let word = line.trim();
            if word.is_empty() || (self.config.skip_comments && word.starts_with('#')) {
                stats.lines_skipped += 1;
                tracing::debug!(line = line_number, "Skipping blank or comment line");
                continue;
            }

            let inserted = if self.config.lowercase {
                trie.insert(word.to_lowercase())
            } else {
                trie.insert(word)
            };
            if inserted {
                stats.words_inserted += 1;
            } else {
                tracing::trace!(line = line_number, word, "Duplicate dictionary entry");
            }
        }

        if stats.words_inserted == 0 {
            tracing::warn!(lines = stats.lines_read, "Dictionary contained no words");
        }

        Ok(stats)
    }
}
