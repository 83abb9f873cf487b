//! `Accept` (RFC 7231 §5.3.2).
//!
//! ```text
//! Accept          = #( media-range [ accept-params ] )
//! media-range     = ( "*/*" / ( type "/*" ) / ( type "/" subtype ) )
//!                   OWS *( OWS ";" OWS parameter )
//! accept-params   = weight *accept-ext
//! accept-ext      = OWS ";" OWS token [ "=" token ]
//! ```
//!
//! Parameter values are bare tokens; quoted strings are not recognised.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::codec::{HeaderCodec, push_list, push_weight};
use crate::errors::{GrammarError, expected};
use crate::grammar::{Cursor, Parsed, infix, literal, ows, parse_complete, prefix, token};
use crate::qvalue::{Weight, optional_weight};
use crate::specificity::Specificity;

/// A requested media range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum MediaRange {
    /// `type/subtype`
    Closed(String, String),
    /// `type/*`
    Partial(String),
    /// `*/*`
    #[default]
    Open,
}

impl MediaRange {
    /// How much of a media type this range pins down.
    #[must_use]
    pub const fn specificity(&self) -> Specificity {
        match self {
            Self::Closed(..) => Specificity::Exact,
            Self::Partial(_) => Specificity::Partial,
            Self::Open => Specificity::Wildcard,
        }
    }

    /// Whether `media_type` falls inside this range; names compare
    /// ASCII-case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use http_conneg::{MediaRange, MediaType};
    ///
    /// let html = MediaType::new("text", "html");
    /// assert!(MediaRange::Partial("TEXT".into()).matches(&html));
    /// assert!(!MediaRange::Closed("text".into(), "plain".into()).matches(&html));
    /// ```
    #[must_use]
    pub fn matches(&self, media_type: &MediaType) -> bool {
        match self {
            Self::Closed(kind, subtype) => {
                kind.eq_ignore_ascii_case(&media_type.kind)
                    && subtype.eq_ignore_ascii_case(&media_type.subtype)
            }
            Self::Partial(kind) => kind.eq_ignore_ascii_case(&media_type.kind),
            Self::Open => true,
        }
    }

    /// [`specificity`](Self::specificity) when the range matches
    /// `media_type`, `None` otherwise.
    #[must_use]
    pub fn match_specificity(&self, media_type: &MediaType) -> Option<Specificity> {
        self.matches(media_type).then(|| self.specificity())
    }
}

impl fmt::Display for MediaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed(kind, subtype) => write!(f, "{kind}/{subtype}"),
            Self::Partial(kind) => write!(f, "{kind}/*"),
            Self::Open => f.write_str("*/*"),
        }
    }
}

impl From<MediaType> for MediaRange {
    fn from(media_type: MediaType) -> Self {
        Self::Closed(media_type.kind, media_type.subtype)
    }
}

/// A concrete `type/subtype` pair a server can produce.
///
/// # Examples
/// ```
/// use http_conneg::MediaType;
///
/// let json: MediaType = "application/json".parse().expect("concrete media type");
/// assert_eq!(json.kind(), "application");
/// assert!("text/*".parse::<MediaType>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    kind: String,
    subtype: String,
}

impl MediaType {
    /// Build a media type from its two components.
    #[must_use]
    pub fn new(kind: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            subtype: subtype.into(),
        }
    }

    /// The top-level type, e.g. `text`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The subtype, e.g. `html`.
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)
    }
}

impl FromStr for MediaType {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let range = parse_complete(s, media_range)?;
        match range {
            MediaRange::Closed(kind, subtype) if kind != "*" && subtype != "*" => {
                Ok(Self { kind, subtype })
            }
            _ => Err(expected("concrete media type", 0)),
        }
    }
}

/// One `Accept` list element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaRangeItem {
    /// The requested range.
    pub media_range: MediaRange,
    /// Media type parameters preceding the weight, e.g. `level=1`.
    pub parameters: BTreeMap<String, String>,
    /// The `q=` weight; `None` means the implicit `1`.
    pub weight: Option<Weight>,
    /// Accept extensions following the weight; values are optional.
    pub extensions: BTreeMap<String, Option<String>>,
}

impl MediaRangeItem {
    /// An item for `media_range` with no parameters and no explicit weight.
    #[must_use]
    pub fn new(media_range: MediaRange) -> Self {
        Self {
            media_range,
            ..Self::default()
        }
    }

    /// Set an explicit weight.
    #[must_use]
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    fn encode(&self, out: &mut String) {
        out.push_str(&self.media_range.to_string());
        for (key, value) in &self.parameters {
            out.push(';');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        push_weight(out, self.weight);
        if self.weight.is_none() {
            return;
        }
        for (key, value) in &self.extensions {
            out.push(';');
            out.push_str(key);
            if let Some(value) = value {
                out.push('=');
                out.push_str(value);
            }
        }
    }
}

/// The `Accept` field: requested media ranges in client order.
///
/// # Examples
/// ```
/// use http_conneg::{Accept, HeaderCodec, MediaRange};
///
/// let accept = Accept::parse("text/*;q=0.3, text/html;level=1, */*;q=0.5")
///     .expect("valid Accept value");
/// assert_eq!(accept.0.len(), 3);
/// assert_eq!(accept.0[0].media_range, MediaRange::Partial("text".into()));
/// assert_eq!(accept.render(), "text/*;q=0.3,text/html;level=1,*/*;q=0.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accept(pub Vec<MediaRangeItem>);

fn media_range(cur: Cursor<'_>) -> Parsed<'_, MediaRange> {
    if let Ok(((), next)) = literal("*/*", cur) {
        return Ok((MediaRange::Open, next));
    }
    let (kind, next) = token(cur)?;
    let ((), next) = literal("/", next)?;
    if let Ok(((), next)) = literal("*", next) {
        return Ok((MediaRange::Partial(kind.to_owned()), next));
    }
    let (subtype, next) = token(next)?;
    Ok((MediaRange::Closed(kind.to_owned(), subtype.to_owned()), next))
}

/// `token "=" token`, refusing the `q` key reserved for the weight.
fn parameter(cur: Cursor<'_>) -> Parsed<'_, (&str, &str)> {
    let (key, next) = token(cur)?;
    if key.eq_ignore_ascii_case("q") {
        return Err(expected("parameter other than q", cur.position()));
    }
    let ((), next) = literal("=", next)?;
    let (value, next) = token(next)?;
    Ok(((key, value), next))
}

fn extension(cur: Cursor<'_>) -> Parsed<'_, (&str, Option<&str>)> {
    let (key, next) = token(cur)?;
    let Ok(((), after_eq)) = literal("=", next) else {
        return Ok(((key, None), next));
    };
    let (value, next) = token(after_eq)?;
    Ok(((key, Some(value)), next))
}

fn media_range_item(cur: Cursor<'_>) -> Parsed<'_, MediaRangeItem> {
    let (media_range, next) = media_range(cur)?;
    let (parameters, next) = prefix(b';', parameter, ows(next));
    let (weight, next) = optional_weight(next);
    let (extensions, next) = if weight.is_some() {
        prefix(b';', extension, next)
    } else {
        (Vec::new(), next)
    };
    let item = MediaRangeItem {
        media_range,
        parameters: parameters
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
        weight,
        extensions: extensions
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.map(str::to_owned)))
            .collect(),
    };
    Ok((item, next))
}

impl HeaderCodec for Accept {
    const NAME: &'static str = "Accept";

    fn decode(raw: &str) -> Result<Self, GrammarError> {
        parse_complete(raw, |cur| Ok(infix(b',', media_range_item, cur))).map(Self)
    }

    fn encode(&self, out: &mut String) {
        push_list(out, &self.0, |out, item| item.encode(out));
    }
}

impl FromStr for Accept {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Accept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::test_support::{rule_err, rule_ok};
    use rstest::rstest;

    fn decode_ok(raw: &str) -> Accept {
        match Accept::decode(raw) {
            Ok(accept) => accept,
            Err(err) => panic!("Accept {raw:?} should parse: {err}"),
        }
    }

    fn closed(kind: &str, subtype: &str) -> MediaRange {
        MediaRange::Closed(kind.into(), subtype.into())
    }

    #[rstest]
    #[case("*/*", MediaRange::Open, 3)]
    #[case("text/*", MediaRange::Partial("text".into()), 6)]
    #[case("text/html", closed("text", "html"), 9)]
    #[case("*/html", closed("*", "html"), 6)]
    fn parses_media_range_forms(
        #[case] input: &str,
        #[case] expected: MediaRange,
        #[case] end: usize,
    ) {
        assert_eq!(rule_ok(input, media_range), (expected, end));
    }

    #[test]
    fn rejects_range_without_subtype() {
        let err = rule_err("text", media_range);
        assert_eq!(err, expected("/", 4));
    }

    #[test]
    fn separates_parameters_weight_and_extensions() {
        let accept = decode_ok("text/html ;level=1;q=0.7;ext;ext2=tok");
        let [item] = accept.0.as_slice() else {
            panic!("expected a single item, got {:?}", accept.0);
        };
        assert_eq!(item.media_range, closed("text", "html"));
        assert_eq!(
            item.parameters.get("level").map(String::as_str),
            Some("1")
        );
        assert_eq!(item.weight, Weight::from_millis(700));
        assert_eq!(item.extensions.get("ext"), Some(&None));
        assert_eq!(item.extensions.get("ext2"), Some(&Some("tok".to_owned())));
    }

    #[test]
    fn repeated_parameter_keeps_last_value() {
        let accept = decode_ok("text/plain;format=flowed;format=fixed");
        let params = accept.0.first().map(|item| &item.parameters);
        assert_eq!(
            params.and_then(|p| p.get("format")).map(String::as_str),
            Some("fixed")
        );
    }

    #[test]
    fn uppercase_q_is_treated_as_weight() {
        let accept = decode_ok("text/html;Q=0.2");
        let item = accept.0.first();
        assert_eq!(item.and_then(|i| i.weight), Weight::from_millis(200));
        assert!(item.is_some_and(|i| i.parameters.is_empty()));
    }

    #[test]
    fn weightless_item_has_no_extensions() {
        let accept = decode_ok("application/json");
        assert_eq!(accept.0, vec![MediaRangeItem::new(closed("application", "json"))]);
    }

    #[rstest]
    #[case("")]
    #[case(" , ")]
    fn accepts_empty_lists(#[case] raw: &str) {
        assert_eq!(decode_ok(raw), Accept::default());
    }

    #[rstest]
    #[case("text/html;level")]
    #[case("text/html;q=0.1234")]
    #[case("text/html;charset=\"utf-8\"")]
    #[case("text/ html")]
    #[case("text/html text/plain")]
    fn rejects_malformed_values(#[case] raw: &str) {
        assert_eq!(Accept::parse(raw), None);
    }

    #[test]
    fn renders_in_canonical_order() {
        let item = MediaRangeItem {
            media_range: closed("text", "html"),
            parameters: BTreeMap::from([("level".to_owned(), "1".to_owned())]),
            weight: Weight::from_millis(500),
            extensions: BTreeMap::from([("x".to_owned(), None)]),
        };
        let accept = Accept(vec![item, MediaRangeItem::new(MediaRange::Open)]);
        assert_eq!(accept.render(), "text/html;level=1;q=0.5;x,*/*");
        assert_eq!(Accept::parse(&accept.render()), Some(accept));
    }

    #[rstest]
    #[case("text/html", true)]
    #[case("image/png", true)]
    #[case("text/*", false)]
    #[case("*/*", false)]
    #[case("*/html", false)]
    fn media_type_requires_concrete_components(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(raw.parse::<MediaType>().is_ok(), ok);
    }

    #[test]
    fn match_specificity_follows_range_kind() {
        let html = MediaType::new("Text", "HTML");
        assert_eq!(
            closed("text", "html").match_specificity(&html),
            Some(Specificity::Exact)
        );
        assert_eq!(
            MediaRange::Partial("text".into()).match_specificity(&html),
            Some(Specificity::Partial)
        );
        assert_eq!(
            MediaRange::Open.match_specificity(&html),
            Some(Specificity::Wildcard)
        );
        assert_eq!(closed("text", "plain").match_specificity(&html), None);
    }
}
