//! `Accept-Language` (RFC 7231 §5.3.5) with RFC 4647 §2.1 basic ranges
//! limited to a primary subtag and an optional second subtag.
//!
//! ```text
//! Accept-Language = #( language-range [ weight ] )
//! language-range  = 1*8ALPHA [ "-" 1*8ALPHA ]
//! ```

use std::fmt;
use std::str::FromStr;

use crate::codec::{HeaderCodec, push_list, push_weight};
use crate::errors::GrammarError;
use crate::grammar::{Cursor, Parsed, alpha_run, infix, literal, parse_complete};
use crate::qvalue::{Weight, optional_weight};
use crate::specificity::Specificity;

const SUBTAG_MAX: usize = 8;

/// A two-part language tag such as `en` or `en-GB`.
///
/// # Examples
/// ```
/// use http_conneg::LanguageTag;
///
/// let tag: LanguageTag = "de-CH".parse().expect("valid tag");
/// assert_eq!(tag.primary(), "de");
/// assert_eq!(tag.region(), Some("CH"));
/// assert_eq!(tag.to_string(), "de-CH");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    primary: String,
    region: Option<String>,
}

impl LanguageTag {
    /// A tag with only a primary subtag.
    #[must_use]
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            region: None,
        }
    }

    /// Add the second subtag.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// The primary language subtag.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The second subtag, when present.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Match a requested range (`self`) against an available tag.
    ///
    /// Identical tags are [`Specificity::Exact`]; a primary-only range that
    /// prefixes a longer available tag is [`Specificity::Partial`]. Subtags
    /// compare ASCII-case-insensitively.
    #[must_use]
    pub fn match_specificity(&self, available: &Self) -> Option<Specificity> {
        if !self.primary.eq_ignore_ascii_case(&available.primary) {
            return None;
        }
        match (&self.region, &available.region) {
            (None, None) => Some(Specificity::Exact),
            (Some(wanted), Some(offered)) => wanted
                .eq_ignore_ascii_case(offered)
                .then_some(Specificity::Exact),
            (None, Some(_)) => Some(Specificity::Partial),
            (Some(_), None) => None,
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.primary)?;
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

impl FromStr for LanguageTag {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complete(s, language_tag)
    }
}

/// One `Accept-Language` list element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageItem {
    /// The requested language range.
    pub language: LanguageTag,
    /// The `q=` weight; `None` means the implicit `1`.
    pub weight: Option<Weight>,
}

/// The `Accept-Language` field.
///
/// # Examples
/// ```
/// use http_conneg::{AcceptLanguage, HeaderCodec};
///
/// let header = AcceptLanguage::parse("da, en-gb;q=0.8, en;q=0.7").expect("valid");
/// assert_eq!(header.render(), "da,en-gb;q=0.8,en;q=0.7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptLanguage(pub Vec<LanguageItem>);

fn language_tag(cur: Cursor<'_>) -> Parsed<'_, LanguageTag> {
    let (primary, next) = alpha_run(SUBTAG_MAX, cur)?;
    let tag = LanguageTag::new(primary);
    let Ok(((), after_dash)) = literal("-", next) else {
        return Ok((tag, next));
    };
    let Ok((region, after)) = alpha_run(SUBTAG_MAX, after_dash) else {
        return Ok((tag, next));
    };
    Ok((tag.with_region(region), after))
}

fn language_item(cur: Cursor<'_>) -> Parsed<'_, LanguageItem> {
    let (language, next) = language_tag(cur)?;
    let (weight, next) = optional_weight(next);
    Ok((LanguageItem { language, weight }, next))
}

impl HeaderCodec for AcceptLanguage {
    const NAME: &'static str = "Accept-Language";

    fn decode(raw: &str) -> Result<Self, GrammarError> {
        parse_complete(raw, |cur| Ok(infix(b',', language_item, cur))).map(Self)
    }

    fn encode(&self, out: &mut String) {
        push_list(out, &self.0, |out, item| {
            out.push_str(&item.language.to_string());
            push_weight(out, item.weight);
        });
    }
}

impl FromStr for AcceptLanguage {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for AcceptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
