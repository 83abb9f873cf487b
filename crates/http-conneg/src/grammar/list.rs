//! The RFC 7230 §7 `#rule` list extension and `;`-chained suffixes.

use super::{Cursor, Parsed, ows};
use crate::errors::GrammarError;

/// `OWS sep OWS`, or `None` when `sep` is not next.
fn separator(sep: u8, cur: Cursor<'_>) -> Option<Cursor<'_>> {
    let cur = ows(cur);
    (cur.peek() == Some(sep)).then(|| ows(cur.advance(1)))
}

fn optional_element<'a, T, F>(element: &F, cur: Cursor<'a>, items: &mut Vec<T>) -> Cursor<'a>
where
    F: Fn(Cursor<'a>) -> Parsed<'a, T>,
{
    let Ok((value, next)) = element(cur) else {
        return cur;
    };
    items.push(value);
    next
}

/// `[ element ] *( OWS sep OWS [ element ] )`
///
/// Empty elements, including leading and trailing ones, are dropped. Never
/// fails; a cursor that does not start a list yields an empty `Vec`.
///
/// # Examples
/// ```
/// use http_conneg::grammar::{infix, token, Cursor};
/// let (items, rest) = infix(b',', token, Cursor::new(", a ,,b,"));
/// assert_eq!(items, vec!["a", "b"]);
/// assert!(rest.is_at_end());
/// ```
pub fn infix<'a, T, F>(sep: u8, element: F, cur: Cursor<'a>) -> (Vec<T>, Cursor<'a>)
where
    F: Fn(Cursor<'a>) -> Parsed<'a, T>,
{
    let mut items = Vec::new();
    let mut cur = optional_element(&element, cur, &mut items);
    while let Some(next) = separator(sep, cur) {
        cur = optional_element(&element, next, &mut items);
    }
    (items, cur)
}

/// [`infix`] that requires at least one element.
///
/// # Errors
/// Returns [`GrammarError::EmptyList`] when no element was found.
pub fn infix1<'a, T, F>(sep: u8, element: F, cur: Cursor<'a>) -> Parsed<'a, Vec<T>>
where
    F: Fn(Cursor<'a>) -> Parsed<'a, T>,
{
    let (items, next) = infix(sep, element, cur);
    if items.is_empty() {
        return Err(GrammarError::EmptyList {
            position: cur.position(),
        });
    }
    Ok((items, next))
}

/// `*( OWS sep OWS element )`
///
/// Stops before the first separator that is not followed by an element.
/// Never fails.
///
/// # Examples
/// ```
/// use http_conneg::grammar::{prefix, token, Cursor};
/// let (items, rest) = prefix(b';', token, Cursor::new(";a ; b;"));
/// assert_eq!(items, vec!["a", "b"]);
/// assert_eq!(rest.peek(), Some(b';'));
/// ```
pub fn prefix<'a, T, F>(sep: u8, element: F, mut cur: Cursor<'a>) -> (Vec<T>, Cursor<'a>)
where
    F: Fn(Cursor<'a>) -> Parsed<'a, T>,
{
    let mut items = Vec::new();
    while let Some(start) = separator(sep, cur) {
        let Ok((value, next)) = element(start) else {
            break;
        };
        items.push(value);
        cur = next;
    }
    (items, cur)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::test_support::rule_err;
    use crate::grammar::{parse_complete, token};
    use rstest::rstest;

    fn tokens(input: &str) -> Vec<&str> {
        match parse_complete(input, |cur| Ok(infix(b',', token, cur))) {
            Ok(items) => items,
            Err(err) => panic!("list {input:?} should parse: {err}"),
        }
    }

    #[rstest]
    #[case("a,,b", vec!["a", "b"])]
    #[case(",a", vec!["a"])]
    #[case("a,", vec!["a"])]
    #[case(" a , b ,\tc ", vec!["a", "b", "c"])]
    #[case(",,,", vec![])]
    #[case("", vec![])]
    fn infix_drops_empty_elements(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokens(input), expected);
    }

    #[test]
    fn infix_stops_before_unseparated_element() {
        let (items, rest) = infix(b',', token, Cursor::new("a b"));
        assert_eq!(items, vec!["a"]);
        assert_eq!(rest.position(), 1);
    }

    #[test]
    fn infix1_rejects_empty_list() {
        let err = rule_err(" , ", |cur| infix1(b',', token, cur));
        assert_eq!(err, GrammarError::EmptyList { position: 0 });
    }

    #[test]
    fn infix1_accepts_single_element() {
        let result = infix1(b',', token, Cursor::new(",utf-8,"));
        assert!(matches!(result, Ok((ref items, _)) if items == &vec!["utf-8"]));
    }

    #[test]
    fn prefix_backtracks_over_dangling_separator() {
        let (items, rest) = prefix(b';', token, Cursor::new("; a ; "));
        assert_eq!(items, vec!["a"]);
        assert_eq!(rest.position(), 3);
    }

    #[test]
    fn prefix_accepts_zero_repetitions() {
        let (items, rest) = prefix(b';', token, Cursor::new(", a"));
        assert!(items.is_empty());
        assert_eq!(rest.position(), 0);
    }
}
