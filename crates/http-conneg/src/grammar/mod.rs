//! ABNF building blocks shared by every header parser.
//!
//! A rule is a plain function from a [`Cursor`] to either the matched value
//! and the cursor after it, or a [`GrammarError`]. Cursors are `Copy`, so a
//! failed alternative backtracks by simply reusing the cursor it was given.
//!
//! # Examples
//! ```
//! use http_conneg::grammar::{parse_complete, infix, token};
//!
//! let items = parse_complete("a,, b ,", |cur| Ok(infix(b',', token, cur)))
//!     .expect("lax list parses");
//! assert_eq!(items, vec!["a", "b"]);
//! ```

mod chars;
mod list;
mod primitives;
#[cfg(test)]
pub(crate) mod test_support;

use crate::errors::GrammarError;

pub use chars::{is_alpha, is_digit, is_tchar, is_wsp};
pub use list::{infix, infix1, prefix};
pub use primitives::{alpha_run, literal, literal_ci, ows, token};

/// Result of applying a rule: the value and the cursor after it.
pub type Parsed<'a, T> = Result<(T, Cursor<'a>), GrammarError>;

/// Immutable read position inside a header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading `input` from its first byte.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Zero-based byte offset of the cursor.
    #[must_use]
    pub const fn position(self) -> usize {
        self.pos
    }

    /// The byte under the cursor, if any.
    #[must_use]
    pub fn peek(self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Whether every byte of the input has been consumed.
    #[must_use]
    pub const fn is_at_end(self) -> bool {
        self.pos >= self.input.len()
    }

    pub(crate) const fn advance(self, n: usize) -> Self {
        Self {
            input: self.input,
            pos: self.pos + n,
        }
    }

    pub(crate) fn remaining(self) -> &'a [u8] {
        self.input.as_bytes().get(self.pos..).unwrap_or_default()
    }

    /// Consume up to `max` bytes satisfying `pred`, returning the matched text.
    pub(crate) fn take_while(self, max: usize, pred: impl Fn(u8) -> bool) -> (&'a str, Self) {
        let bytes = self.input.as_bytes();
        let mut end = self.pos;
        while let Some(&b) = bytes.get(end) {
            if end - self.pos == max || !pred(b) {
                break;
            }
            end += 1;
        }
        let text = self.input.get(self.pos..end).unwrap_or_default();
        (text, Self { pos: end, ..self })
    }
}

/// Run `rule` over the whole of `input`.
///
/// Optional whitespace around the value is skipped; anything left over after
/// the rule is reported as [`GrammarError::TrailingInput`].
///
/// # Errors
/// Returns the rule's own error, or `TrailingInput` when the rule stopped
/// before the end of the input.
pub fn parse_complete<'a, T, F>(input: &'a str, rule: F) -> Result<T, GrammarError>
where
    F: FnOnce(Cursor<'a>) -> Parsed<'a, T>,
{
    let (value, cur) = rule(ows(Cursor::new(input)))?;
    let cur = ows(cur);
    if cur.is_at_end() {
        Ok(value)
    } else {
        Err(GrammarError::TrailingInput {
            position: cur.position(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_while_stops_at_limit() {
        let (text, cur) = Cursor::new("abcdef").take_while(3, is_alpha);
        assert_eq!(text, "abc");
        assert_eq!(cur.position(), 3);
    }

    #[test]
    fn take_while_stops_at_predicate_failure() {
        let (text, cur) = Cursor::new("ab1").take_while(usize::MAX, is_alpha);
        assert_eq!(text, "ab");
        assert_eq!(cur.peek(), Some(b'1'));
    }

    #[test]
    fn parse_complete_skips_surrounding_whitespace() {
        let value = parse_complete("  gzip\t", token);
        assert_eq!(value, Ok("gzip"));
    }

    #[test]
    fn parse_complete_reports_trailing_input() {
        let err = parse_complete("gzip /", token);
        assert_eq!(err, Err(GrammarError::TrailingInput { position: 5 }));
    }

    #[test]
    fn cursor_reports_end_of_input() {
        let cur = Cursor::new("a").advance(1);
        assert!(cur.is_at_end());
        assert_eq!(cur.peek(), None);
        assert!(cur.remaining().is_empty());
    }
}
