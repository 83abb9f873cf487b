//! How precisely a requested value pins down an available one.
//!
//! When one requested entry matches several available representations, the
//! negotiator keeps the candidate with the highest specificity. The scale is
//! shared by every negotiable header so media ranges, charsets, encodings and
//! language ranges rank the same way.

/// Specificity of a match between a requested and an available value.
///
/// Variants are ordered from least to most specific.
///
/// # Examples
///
/// ```
/// use http_conneg::{MediaRange, Specificity};
///
/// assert!(Specificity::Exact > Specificity::Partial);
/// assert_eq!(MediaRange::Open.specificity().score(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    /// A full wildcard such as `*/*` or `*`.
    Wildcard = 1,
    /// Only the leading component is pinned, such as `text/*` or `en`
    /// against `en-GB`.
    Partial = 2,
    /// Every component is pinned.
    Exact = 3,
}

impl Specificity {
    /// Numeric score: 1 for wildcards, 2 for partial matches, 3 for exact.
    #[must_use]
    pub const fn score(self) -> u8 {
        self as u8
    }
}
