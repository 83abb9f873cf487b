//! Error types shared by the header grammar modules.

use thiserror::Error;

/// Errors surfaced while matching header text against its grammar.
///
/// Every variant carries the zero-based byte offset where matching stopped,
/// so callers that keep the diagnostic (rather than collapsing it to `None`
/// through [`HeaderCodec::parse`](crate::HeaderCodec::parse)) can point at
/// the offending input.
///
/// # Examples
/// ```
/// use http_conneg::{AcceptCharset, GrammarError, HeaderCodec};
///
/// let err = AcceptCharset::decode("").unwrap_err();
/// assert_eq!(err, GrammarError::EmptyList { position: 0 });
/// assert_eq!(err.to_string(), "expected at least one list element at byte 0 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A rule required input that was not present.
    #[error("expected {what} at byte {position} (zero-based)")]
    Expected {
        /// Human-readable name of the missing production.
        what: &'static str,
        /// Offset where the production was attempted.
        position: usize,
    },
    /// The value parsed, but unconsumed text followed it.
    #[error("unexpected trailing input at byte {position} (zero-based)")]
    TrailingInput {
        /// Offset of the first unconsumed byte.
        position: usize,
    },
    /// A `1#rule` list produced no elements.
    #[error("expected at least one list element at byte {position} (zero-based)")]
    EmptyList {
        /// Offset where the list started.
        position: usize,
    },
}

impl GrammarError {
    /// Byte offset at which the grammar failed.
    ///
    /// # Examples
    /// ```
    /// use http_conneg::GrammarError;
    /// let err = GrammarError::TrailingInput { position: 7 };
    /// assert_eq!(err.position(), 7);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Expected { position, .. }
            | Self::TrailingInput { position }
            | Self::EmptyList { position } => *position,
        }
    }
}

pub(crate) const fn expected(what: &'static str, position: usize) -> GrammarError {
    GrammarError::Expected { what, position }
}
