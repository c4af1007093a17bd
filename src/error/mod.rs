//! Error module for the fuzzy trie crate.
//!
//! The trie itself is infallible; every error here originates at the edges,
//! in configuration loading, dictionary reading, and the command-line driver.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;
use tracing_error::SpanTrace;

pub mod config;
pub mod dictionary;

/// Result type alias used throughout the crate.
pub type FuzzyResult<T> = Result<T, FuzzyError>;

/// Core error enum for the fuzzy trie crate.
#[derive(Error, Debug)]
pub enum FuzzyError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while loading a dictionary.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] dictionary::DictionaryError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when writing configuration.
    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: FuzzyError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,

    /// Spans that were active when the error was captured.
    pub trace: Option<SpanTrace>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: FuzzyError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
            trace: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Captures the currently active spans into the context.
    ///
    /// Only yields frames when a `tracing_error::ErrorLayer` is installed.
    pub fn with_span_trace(mut self) -> Self {
        self.trace = Some(SpanTrace::capture());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: &ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            trace = %context.trace.as_ref().map(ToString::to_string).unwrap_or_default(),
            "Error reported"
        );
    }
}

/// Global error reporter accessor.
#[derive(Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the reporter errors are forwarded to.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    ///
    /// Falls back to standard error when no reporter has been installed.
    pub fn report(&self, context: ErrorContext) {
        match &self.reporter {
            Some(reporter) => reporter.report(&context),
            None => eprintln!("Error: {context}"),
        }
    }
}

/// Error reporting singleton instance.
static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Report an error through the global reporter.
pub fn report_error(context: ErrorContext) {
    ERROR_REPORTING.read().report(context);
}

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING.write().set_reporter(reporter);
}
