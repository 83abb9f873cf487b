//! Failures surfaced by the `conneg` tool.

use http_conneg::GrammarError;
use thiserror::Error;

/// Errors that stop a `conneg` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// An environment variable or flag carried an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A header value did not match its grammar while running in strict mode.
    #[error("malformed {header} value: {source}")]
    MalformedHeader {
        /// Canonical field name.
        header: &'static str,
        /// Where parsing stopped.
        source: GrammarError,
    },

    /// An available representation could not be parsed.
    #[error("invalid available value '{value}': {source}")]
    InvalidAvailable {
        /// The rejected argument.
        value: String,
        /// Where parsing stopped.
        source: GrammarError,
    },

    /// The `--etag` argument was not a quoted entity tag.
    #[error("invalid entity tag '{value}': {source}")]
    InvalidEntityTag {
        /// The rejected argument.
        value: String,
        /// Where parsing stopped.
        source: GrammarError,
    },
}
