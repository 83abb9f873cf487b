//! Terminal rules: tokens, whitespace, literals.

use super::{Cursor, Parsed, is_alpha, is_tchar, is_wsp};
use crate::errors::expected;

/// `token = 1*tchar`
///
/// # Errors
/// Fails when the cursor is not on a `tchar`.
///
/// # Examples
/// ```
/// use http_conneg::grammar::{token, Cursor};
/// let (text, rest) = token(Cursor::new("gzip;q=1")).expect("token matches");
/// assert_eq!(text, "gzip");
/// assert_eq!(rest.peek(), Some(b';'));
/// ```
pub fn token(cur: Cursor<'_>) -> Parsed<'_, &str> {
    let (text, next) = cur.take_while(usize::MAX, is_tchar);
    if text.is_empty() {
        return Err(expected("token", cur.position()));
    }
    Ok((text, next))
}

/// `OWS = *( SP / HTAB )`; never fails.
#[must_use]
pub fn ows(cur: Cursor<'_>) -> Cursor<'_> {
    cur.take_while(usize::MAX, is_wsp).1
}

/// Match `text` byte for byte.
///
/// # Errors
/// Fails when the input at the cursor differs from `text`.
pub fn literal<'a>(text: &'static str, cur: Cursor<'a>) -> Parsed<'a, ()> {
    if cur.remaining().starts_with(text.as_bytes()) {
        Ok(((), cur.advance(text.len())))
    } else {
        Err(expected(text, cur.position()))
    }
}

/// Match `text` ignoring ASCII case.
///
/// # Errors
/// Fails when the input at the cursor differs from `text` in anything but
/// case.
pub fn literal_ci<'a>(text: &'static str, cur: Cursor<'a>) -> Parsed<'a, ()> {
    let matches = cur
        .remaining()
        .get(..text.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(text.as_bytes()));
    if matches {
        Ok(((), cur.advance(text.len())))
    } else {
        Err(expected(text, cur.position()))
    }
}

/// `1*max ALPHA`, consuming at most `max` letters.
///
/// # Errors
/// Fails when the cursor is not on a letter.
pub fn alpha_run(max: usize, cur: Cursor<'_>) -> Parsed<'_, &str> {
    let (text, next) = cur.take_while(max, is_alpha);
    if text.is_empty() {
        return Err(expected("ALPHA", cur.position()));
    }
    Ok((text, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::test_support::{rule_err, rule_ok};
    use rstest::rstest;

    #[rstest]
    #[case("gzip", "gzip", 4)]
    #[case("x-gzip, br", "x-gzip", 6)]
    #[case("*;q=0", "*", 1)]
    #[case("text/html", "text", 4)]
    fn token_matches_tchar_run(#[case] input: &str, #[case] text: &str, #[case] end: usize) {
        let (value, next) = rule_ok(input, token);
        assert_eq!(value, text);
        assert_eq!(next, end);
    }

    #[test]
    fn token_requires_one_character() {
        let err = rule_err(";q=1", token);
        assert_eq!(err.to_string(), "expected token at byte 0 (zero-based)");
    }

    #[test]
    fn ows_skips_spaces_and_tabs_only() {
        let cur = ows(Cursor::new(" \t \r\n"));
        assert_eq!(cur.position(), 3);
        assert_eq!(ows(Cursor::new("x")).position(), 0);
    }

    #[test]
    fn literal_is_case_sensitive() {
        assert!(literal("q=", Cursor::new("q=1")).is_ok());
        assert!(literal("q=", Cursor::new("Q=1")).is_err());
    }

    #[test]
    fn literal_ci_ignores_case() {
        let (_, next) = rule_ok("IdEnTiTy", |cur| literal_ci("identity", cur));
        assert_eq!(next, 8);
        assert!(literal_ci("identity", Cursor::new("ident")).is_err());
    }

    #[test]
    fn alpha_run_caps_length() {
        let (value, next) = rule_ok("abcdefghij", |cur| alpha_run(8, cur));
        assert_eq!(value, "abcdefgh");
        assert_eq!(next, 8);
        assert!(alpha_run(8, Cursor::new("1a")).is_err());
    }
}
