//! Quality values (RFC 7231 §5.3.1).
//!
//! `qvalue` carries at most three fractional digits, so weights are stored
//! as thousandths. That keeps comparison and round-tripping exact while
//! [`Weight::as_f32`] still offers the conventional float view.

use std::fmt;

use crate::errors::expected;
use crate::grammar::{Cursor, Parsed, is_digit, literal, literal_ci, ows};

/// A client preference weight in `[0, 1]` with three-digit precision.
///
/// # Examples
/// ```
/// use http_conneg::Weight;
///
/// let w = Weight::from_millis(500).expect("in range");
/// assert_eq!(w.to_string(), "0.5");
/// assert!(Weight::ONE > w);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    /// `q=0`: not acceptable.
    pub const ZERO: Self = Self(0);
    /// `q=1`, the implicit weight of an entry without `q=`.
    pub const ONE: Self = Self(1000);

    /// Build a weight from thousandths, rejecting values above `1000`.
    #[must_use]
    pub const fn from_millis(millis: u16) -> Option<Self> {
        if millis > 1000 {
            None
        } else {
            Some(Self(millis))
        }
    }

    /// The weight in thousandths.
    #[must_use]
    pub const fn millis(self) -> u16 {
        self.0
    }

    /// The weight as a float in `[0.0, 1.0]`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the float view is derived from the exact fixed-point value"
    )]
    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 1000.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("0"),
            1000.. => f.write_str("1"),
            millis => {
                let digits = format!("{millis:03}");
                write!(f, "0.{}", digits.trim_end_matches('0'))
            }
        }
    }
}

/// Up to three digits, then a lookahead that rejects a fourth.
fn fraction<'a>(cur: Cursor<'a>, allowed: impl Fn(u8) -> bool) -> Parsed<'a, &'a [u8]> {
    let (text, next) = cur.take_while(3, allowed);
    if next.peek().is_some_and(is_digit) {
        return Err(expected("at most three fractional digits", next.position()));
    }
    Ok((text.as_bytes(), next))
}

/// `qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )`
///
/// # Errors
/// Fails on anything outside the two branches, including a fourth
/// fractional digit.
pub fn qvalue(cur: Cursor<'_>) -> Parsed<'_, Weight> {
    if let Ok(((), next)) = literal("0", cur) {
        let Ok(((), dot)) = literal(".", next) else {
            return Ok((Weight::ZERO, next));
        };
        let (digits, after) = fraction(dot, is_digit)?;
        let millis = (0..3).fold(0u16, |acc, i| {
            let digit = digits.get(i).map_or(0, |d| u16::from(d - b'0'));
            acc * 10 + digit
        });
        return Ok((Weight(millis), after));
    }
    let ((), next) = literal("1", cur).map_err(|_| expected("qvalue", cur.position()))?;
    let Ok(((), dot)) = literal(".", next) else {
        return Ok((Weight::ONE, next));
    };
    let (_, after) = fraction(dot, |b| b == b'0')?;
    Ok((Weight::ONE, after))
}

/// `weight = OWS ";" OWS "q=" qvalue OWS`
///
/// # Errors
/// Fails when the cursor does not start a `;q=` suffix.
///
/// # Examples
/// ```
/// use http_conneg::grammar::Cursor;
/// use http_conneg::qvalue::weight;
///
/// let (w, rest) = weight(Cursor::new(" ; q=0.123")).expect("weight parses");
/// assert_eq!(w.millis(), 123);
/// assert!(rest.is_at_end());
/// ```
pub fn weight(cur: Cursor<'_>) -> Parsed<'_, Weight> {
    let ((), next) = literal(";", ows(cur))?;
    let ((), next) = literal_ci("q", ows(next))?;
    let ((), next) = literal("=", next)?;
    let (value, next) = qvalue(next)?;
    Ok((value, ows(next)))
}

/// Parse an optional weight, leaving the cursor untouched when absent.
pub(crate) fn optional_weight(cur: Cursor<'_>) -> (Option<Weight>, Cursor<'_>) {
    weight(cur).map_or((None, cur), |(value, next)| (Some(value), next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse_complete;
    use rstest::rstest;

    fn parse_weight(input: &str) -> Option<u16> {
        parse_complete(input, weight).ok().map(Weight::millis)
    }

    #[rstest]
    #[case(";q=0.123", Some(123))]
    #[case(";q=0.5", Some(500))]
    #[case(";q=0.05", Some(50))]
    #[case(";q=0.", Some(0))]
    #[case(";q=0", Some(0))]
    #[case(";q=1", Some(1000))]
    #[case(";q=1.", Some(1000))]
    #[case(";q=1.000", Some(1000))]
    #[case(" ; Q=0.8 ", Some(800))]
    #[case(";q=0.1234", None)]
    #[case(";q=1.0001", None)]
    #[case(";q=1.5", None)]
    #[case(";q=2", None)]
    #[case(";q=.5", None)]
    #[case("q=0.5", None)]
    fn parses_weight_suffix(#[case] input: &str, #[case] expected: Option<u16>) {
        assert_eq!(parse_weight(input), expected);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(1000, "1")]
    #[case(500, "0.5")]
    #[case(50, "0.05")]
    #[case(123, "0.123")]
    #[case(120, "0.12")]
    fn renders_shortest_form(#[case] millis: u16, #[case] expected: &str) {
        let Some(w) = Weight::from_millis(millis) else {
            panic!("{millis} should be in range");
        };
        assert_eq!(w.to_string(), expected);
    }

    #[test]
    fn rejects_out_of_range_millis() {
        assert_eq!(Weight::from_millis(1001), None);
    }

    #[test]
    fn float_view_matches_fixed_point() {
        assert_eq!(Weight(250).as_f32().to_bits(), 0.25_f32.to_bits());
        assert_eq!(Weight::ONE.as_f32().to_bits(), 1.0_f32.to_bits());
        assert_eq!(Weight::ZERO.as_f32().to_bits(), 0.0_f32.to_bits());
    }

    #[test]
    fn default_weight_is_one() {
        assert_eq!(Weight::default(), Weight::ONE);
    }

    #[test]
    fn optional_weight_leaves_cursor_when_absent() {
        let cur = Cursor::new(";level=1");
        assert_eq!(optional_weight(cur), (None, cur));
    }
}
