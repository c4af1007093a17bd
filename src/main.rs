//! Fuzzy Trie - command-line entry point.
//!
//! Loads a word list into a fuzzy trie, runs one query against it and
//! prints every match as `word<TAB>cost`, one per line.

use clap::{Parser, Subcommand};
use fuzzy_trie_lib::config::{self, ConfigLoader, ConfigResult, FuzzyConfig, LogConfig};
use fuzzy_trie_lib::dictionary::DictionaryLoader;
use fuzzy_trie_lib::error::{
    report_error, set_error_reporter, ErrorContext, FuzzyError, FuzzyResult, TracingErrorReporter,
};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "fuzzy_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Find dictionary words within an edit distance of a query
    Search {
        /// The word to look up
        query: String,

        /// Maximum edit distance (defaults to `search.max_cost`)
        #[clap(short, long)]
        max_cost: Option<usize>,

        /// Word list to load (defaults to `dictionary.path`)
        #[clap(short, long, value_parser)]
        dictionary: Option<PathBuf>,

        /// Visit every branch instead of pruning distant ones
        #[clap(long)]
        no_prune: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to
/// stderr so that stdout carries only results.
fn init_logging(log: &LogConfig) -> FuzzyResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let fmt_layer = if log.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| FuzzyError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configuration from an explicit path, or from the default
/// location when that file exists.
fn load_config(path: Option<&Path>) -> ConfigResult<FuzzyConfig> {
    let default_path = Path::new(config::DEFAULT_CONFIG_PATH);
    let path = path.or_else(|| default_path.exists().then_some(default_path));
    ConfigLoader::new(path, config::ENV_PREFIX).load()
}

/// Loads the dictionary and prints every match for `query`.
fn run_search(config: &FuzzyConfig, query: &str, max_cost: usize) -> FuzzyResult<()> {
    let loader = DictionaryLoader::new(config.dictionary.clone());
    let (trie, stats) = loader.load(config.search.trie_config())?;
    info!(
        words = trie.len(),
        nodes = trie.node_count(),
        skipped = stats.lines_skipped,
        "Index built"
    );

    let (matches, search_stats) = trie.search_with_stats(query, max_cost);
    info!(
        matches = matches.len(),
        nodes_visited = search_stats.nodes_visited,
        subtrees_pruned = search_stats.subtrees_pruned,
        "Search finished"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for found in &matches {
        writeln!(out, "{found}")?;
    }
    out.flush()?;

    Ok(())
}

/// Writes the default configuration as TOML to `output`.
fn write_default_config(output: &Path) -> FuzzyResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&FuzzyConfig::default())?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Reports a configuration that loaded and validated.
fn report_valid_config<W: Write>(config: &FuzzyConfig, out: &mut W) -> FuzzyResult<()> {
    writeln!(
        out,
        "Configuration is valid (dictionary: {}, max_cost: {})",
        config.dictionary.path.display(),
        config.search.max_cost
    )?;
    Ok(())
}

/// Main entry point for the application.
fn main() -> FuzzyResult<()> {
    let args = <Args as clap::Parser>::parse();

    // A broken config file must not stop `gen-config` from replacing it.
    if let Command::GenConfig { output } = &args.command {
        init_logging(&LogConfig::default())?;
        info!("Generating default configuration");
        return write_default_config(output);
    }

    let loaded = load_config(args.config.as_deref());
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    set_error_reporter(Arc::new(TracingErrorReporter));

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config").with_span_trace());
            process::exit(1);
        }
    };

    match args.command {
        Command::Search {
            query,
            max_cost,
            dictionary,
            no_prune,
        } => {
            if let Some(path) = dictionary {
                config.dictionary.path = path;
            }
            if no_prune {
                config.search.prune = false;
            }
            let config = config::init_global_config(config);
            let max_cost = max_cost.unwrap_or(config.search.max_cost);
            let _span = tracing::info_span!("search", %query, max_cost).entered();

            if let Err(e) = run_search(&config, &query, max_cost) {
                let details = format!("dictionary: {}", config.dictionary.path.display());
                report_error(
                    ErrorContext::new(e, "search")
                        .with_details(details)
                        .with_span_trace(),
                );
                process::exit(1);
            }
            Ok(())
        }
        Command::Validate => {
            let config = config::init_global_config(config);
            report_valid_config(&config, &mut std::io::stdout().lock())
        }
        // Handled before the configuration is loaded.
        Command::GenConfig { .. } => Ok(()),
    }
}
