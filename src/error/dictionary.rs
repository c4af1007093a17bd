//! Dictionary error module.
//!
//! This module defines error types that may occur while reading a word list
//! into a fuzzy trie.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the dictionary file does not exist.
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the dictionary file cannot be opened.
    #[error("Failed to open dictionary file {path}: {source}")]
    OpenFailed {
        /// Path of the dictionary file
        path: PathBuf,
        /// The underlying IO error
        source: io::Error,
    },

    /// Error when a line is not valid UTF-8.
    #[error("Dictionary line {line} is not valid UTF-8")]
    InvalidEncoding {
        /// One-based line number
        line: usize,
    },

    /// Error when reading a line fails for any other reason.
    #[error("Failed to read dictionary line {line}: {source}")]
    ReadFailed {
        /// One-based line number
        line: usize,
        /// The underlying IO error
        source: io::Error,
    },
}

impl DictionaryError {
    /// Classifies an IO error raised while reading `line`.
    pub fn from_read(line: usize, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            Self::InvalidEncoding { line }
        } else {
            Self::ReadFailed { line, source }
        }
    }
}
