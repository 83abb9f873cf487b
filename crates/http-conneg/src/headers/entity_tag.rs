//! `If-Match` and `If-None-Match` (RFC 7232 §3.1, §3.2).
//!
//! ```text
//! If-Match      = "*" / #entity-tag
//! If-None-Match = "*" / #entity-tag
//! entity-tag    = DQUOTE token DQUOTE
//! ```
//!
//! The `W/` weakness prefix is not recognised, so every parsed tag is
//! [`EntityTag::Strong`].

use std::fmt;
use std::str::FromStr;

use crate::codec::{HeaderCodec, push_list, push_quoted};
use crate::errors::GrammarError;
use crate::grammar::{Cursor, Parsed, infix, literal, parse_complete, token};

/// An opaque validator for one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityTag {
    /// A strong validator.
    Strong(String),
    /// A weak validator, written `W/"..."`.
    Weak(String),
}

impl EntityTag {
    /// The tag text without quotes or weakness prefix.
    #[must_use]
    pub fn opaque(&self) -> &str {
        match self {
            Self::Strong(tag) | Self::Weak(tag) => tag,
        }
    }

    /// Whether this is a weak validator.
    #[must_use]
    pub const fn is_weak(&self) -> bool {
        matches!(self, Self::Weak(_))
    }

    /// Strong comparison (RFC 7232 §2.3.2): both tags are strong and their
    /// opaque text is identical.
    ///
    /// # Examples
    /// ```
    /// use http_conneg::EntityTag;
    ///
    /// let a = EntityTag::Strong("v1".into());
    /// assert!(a.strong_eq(&EntityTag::Strong("v1".into())));
    /// assert!(!a.strong_eq(&EntityTag::Weak("v1".into())));
    /// ```
    #[must_use]
    pub fn strong_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Strong(a), Self::Strong(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strong(tag) => write!(f, "\"{tag}\""),
            Self::Weak(tag) => write!(f, "W/\"{tag}\""),
        }
    }
}

impl FromStr for EntityTag {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complete(s, entity_tag)
    }
}

/// The `If-Match` field.
///
/// # Examples
/// ```
/// use http_conneg::{EntityTag, HeaderCodec, IfMatch};
///
/// assert_eq!(IfMatch::parse("*"), Some(IfMatch::Any));
/// assert_eq!(
///     IfMatch::parse("\"abc\",\"def\""),
///     Some(IfMatch::EntityTags(vec![
///         EntityTag::Strong("abc".into()),
///         EntityTag::Strong("def".into()),
///     ]))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IfMatch {
    /// `*`
    Any,
    /// A list of entity tags.
    EntityTags(Vec<EntityTag>),
}

/// The `If-None-Match` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IfNoneMatch {
    /// `*`
    Any,
    /// A list of entity tags.
    EntityTags(Vec<EntityTag>),
}

fn entity_tag(cur: Cursor<'_>) -> Parsed<'_, EntityTag> {
    let ((), next) = literal("\"", cur)?;
    let (tag, next) = token(next)?;
    let ((), next) = literal("\"", next)?;
    Ok((EntityTag::Strong(tag.to_owned()), next))
}

/// `"*"` or a list of tags; `None` stands for `*`.
fn tag_condition(raw: &str) -> Result<Option<Vec<EntityTag>>, GrammarError> {
    if parse_complete(raw, |cur| literal("*", cur)).is_ok() {
        return Ok(None);
    }
    parse_complete(raw, |cur| Ok(infix(b',', entity_tag, cur))).map(Some)
}

fn encode_condition(out: &mut String, tags: Option<&[EntityTag]>) {
    let Some(tags) = tags else {
        out.push('*');
        return;
    };
    push_list(out, tags, |out, tag| {
        if tag.is_weak() {
            out.push_str("W/");
        }
        push_quoted(out, tag.opaque());
    });
}

impl IfMatch {
    fn tags(&self) -> Option<&[EntityTag]> {
        match self {
            Self::Any => None,
            Self::EntityTags(tags) => Some(tags.as_slice()),
        }
    }
}

impl IfNoneMatch {
    fn tags(&self) -> Option<&[EntityTag]> {
        match self {
            Self::Any => None,
            Self::EntityTags(tags) => Some(tags.as_slice()),
        }
    }
}

impl HeaderCodec for IfMatch {
    const NAME: &'static str = "If-Match";

    fn decode(raw: &str) -> Result<Self, GrammarError> {
        Ok(tag_condition(raw)?.map_or(Self::Any, Self::EntityTags))
    }

    fn encode(&self, out: &mut String) {
        encode_condition(out, self.tags());
    }
}

impl HeaderCodec for IfNoneMatch {
    const NAME: &'static str = "If-None-Match";

    fn decode(raw: &str) -> Result<Self, GrammarError> {
        Ok(tag_condition(raw)?.map_or(Self::Any, Self::EntityTags))
    }

    fn encode(&self, out: &mut String) {
        encode_condition(out, self.tags());
    }
}

impl FromStr for IfMatch {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl FromStr for IfNoneMatch {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for IfMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for IfNoneMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
