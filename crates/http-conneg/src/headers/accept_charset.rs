//! `Accept-Charset` (RFC 7231 §5.3.3).
//!
//! ```text
//! Accept-Charset = 1#( ( charset / "*" ) [ weight ] )
//! ```

use std::fmt;
use std::str::FromStr;

use crate::codec::{HeaderCodec, push_list, push_weight};
use crate::errors::GrammarError;
use crate::grammar::{Cursor, Parsed, infix1, parse_complete, token};
use crate::qvalue::{Weight, optional_weight};
use crate::specificity::Specificity;

/// A requested charset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Charset {
    /// A named charset such as `utf-8`.
    Named(String),
    /// `*`
    Any,
}

impl Charset {
    /// Match against an available charset name, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use http_conneg::{Charset, Specificity};
    ///
    /// assert_eq!(Charset::Named("UTF-8".into()).match_specificity("utf-8"), Some(Specificity::Exact));
    /// assert_eq!(Charset::Any.match_specificity("latin1"), Some(Specificity::Wildcard));
    /// ```
    #[must_use]
    pub fn match_specificity(&self, available: &str) -> Option<Specificity> {
        match self {
            Self::Named(name) => name
                .eq_ignore_ascii_case(available)
                .then_some(Specificity::Exact),
            Self::Any => Some(Specificity::Wildcard),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Any => f.write_str("*"),
        }
    }
}

/// One `Accept-Charset` list element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetItem {
    /// The requested charset.
    pub charset: Charset,
    /// The `q=` weight; `None` means the implicit `1`.
    pub weight: Option<Weight>,
}

/// The `Accept-Charset` field. Never empty once parsed.
///
/// # Examples
/// ```
/// use http_conneg::{AcceptCharset, Charset, HeaderCodec};
///
/// let header = AcceptCharset::parse("iso-8859-5, unicode-1-1;q=0.8").expect("valid");
/// assert_eq!(header.0[0].charset, Charset::Named("iso-8859-5".into()));
/// assert_eq!(AcceptCharset::parse(""), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptCharset(pub Vec<CharsetItem>);

fn charset_item(cur: Cursor<'_>) -> Parsed<'_, CharsetItem> {
    let (name, next) = token(cur)?;
    let charset = if name == "*" {
        Charset::Any
    } else {
        Charset::Named(name.to_owned())
    };
    let (weight, next) = optional_weight(next);
    Ok((CharsetItem { charset, weight }, next))
}

impl HeaderCodec for AcceptCharset {
    const NAME: &'static str = "Accept-Charset";

    fn decode(raw: &str) -> Result<Self, GrammarError> {
        parse_complete(raw, |cur| infix1(b',', charset_item, cur)).map(Self)
    }

    fn encode(&self, out: &mut String) {
        push_list(out, &self.0, |out, item| {
            out.push_str(&item.charset.to_string());
            push_weight(out, item.weight);
        });
    }
}

impl FromStr for AcceptCharset {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for AcceptCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(charset: Charset, millis: Option<u16>) -> CharsetItem {
        CharsetItem {
            charset,
            weight: millis.and_then(Weight::from_millis),
        }
    }

    fn named(name: &str) -> Charset {
        Charset::Named(name.to_owned())
    }

    #[test]
    fn parses_named_and_wildcard_entries() {
        let parsed = AcceptCharset::decode("utf-8, iso-8859-1;q=0.5 , *;q=0");
        assert_eq!(
            parsed,
            Ok(AcceptCharset(vec![
                item(named("utf-8"), None),
                item(named("iso-8859-1"), Some(500)),
                item(Charset::Any, Some(0)),
            ]))
        );
    }

    #[rstest]
    #[case("")]
    #[case(",")]
    #[case(" , ,")]
    fn requires_at_least_one_entry(#[case] raw: &str) {
        assert!(matches!(
            AcceptCharset::decode(raw),
            Err(GrammarError::EmptyList { .. })
        ));
    }

    #[rstest]
    #[case("utf-8;q=2")]
    #[case("utf-8;level=1")]
    #[case("\"utf-8\"")]
    fn rejects_malformed_entries(#[case] raw: &str) {
        assert_eq!(AcceptCharset::parse(raw), None);
    }

    #[test]
    fn renders_entries_with_weights() {
        let header = AcceptCharset(vec![
            item(named("utf-8"), None),
            item(Charset::Any, Some(100)),
        ]);
        assert_eq!(header.render(), "utf-8,*;q=0.1");
    }

    #[test]
    fn named_match_is_case_insensitive() {
        assert_eq!(
            named("ISO-8859-1").match_specificity("iso-8859-1"),
            Some(Specificity::Exact)
        );
        assert_eq!(named("utf-8").match_specificity("utf-16"), None);
    }
}
