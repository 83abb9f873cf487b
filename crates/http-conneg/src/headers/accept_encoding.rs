//! `Accept-Encoding` (RFC 7231 §5.3.4).
//!
//! ```text
//! Accept-Encoding = #( codings [ weight ] )
//! codings         = content-coding / "identity" / "*"
//! ```

use std::fmt;
use std::str::FromStr;

use crate::codec::{HeaderCodec, push_list, push_weight};
use crate::errors::GrammarError;
use crate::grammar::{Cursor, Parsed, infix, parse_complete, token};
use crate::qvalue::{Weight, optional_weight};
use crate::specificity::Specificity;

/// A requested content coding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// A named coding such as `gzip`.
    Named(String),
    /// `identity`, meaning no transformation.
    Identity,
    /// `*`
    Any,
}

impl Encoding {
    /// Match against an available coding name, ignoring ASCII case.
    #[must_use]
    pub fn match_specificity(&self, available: &str) -> Option<Specificity> {
        match self {
            Self::Named(name) => name
                .eq_ignore_ascii_case(available)
                .then_some(Specificity::Exact),
            Self::Identity => available
                .eq_ignore_ascii_case("identity")
                .then_some(Specificity::Exact),
            Self::Any => Some(Specificity::Wildcard),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Identity => f.write_str("identity"),
            Self::Any => f.write_str("*"),
        }
    }
}

/// One `Accept-Encoding` list element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingItem {
    /// The requested coding.
    pub encoding: Encoding,
    /// The `q=` weight; `None` means the implicit `1`.
    pub weight: Option<Weight>,
}

/// The `Accept-Encoding` field. An empty list is valid and means the client
/// wants no coding at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptEncoding(pub Vec<EncodingItem>);

fn encoding_item(cur: Cursor<'_>) -> Parsed<'_, EncodingItem> {
    let (name, next) = token(cur)?;
    let encoding = if name == "*" {
        Encoding::Any
    } else if name.eq_ignore_ascii_case("identity") {
        Encoding::Identity
    } else {
        Encoding::Named(name.to_owned())
    };
    let (weight, next) = optional_weight(next);
    Ok((EncodingItem { encoding, weight }, next))
}

impl HeaderCodec for AcceptEncoding {
    const NAME: &'static str = "Accept-Encoding";

    fn decode(raw: &str) -> Result<Self, GrammarError> {
        parse_complete(raw, |cur| Ok(infix(b',', encoding_item, cur))).map(Self)
    }

    fn encode(&self, out: &mut String) {
        push_list(out, &self.0, |out, item| {
            out.push_str(&item.encoding.to_string());
            push_weight(out, item.weight);
        });
    }
}

impl FromStr for AcceptEncoding {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for AcceptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
