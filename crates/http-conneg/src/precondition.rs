//! Evaluating `If-Match` and `If-None-Match` (RFC 7232 §3.1, §3.2).
//!
//! `current` is the entity tag of the selected representation, or `None`
//! when the target resource has no current representation. Comparison is
//! always strong.

use crate::headers::{EntityTag, IfMatch, IfNoneMatch};

impl IfMatch {
    /// Whether the request may proceed; `false` maps to `412 Precondition
    /// Failed`.
    ///
    /// # Examples
    /// ```
    /// use http_conneg::{EntityTag, HeaderCodec, IfMatch};
    ///
    /// let current = EntityTag::Strong("v2".into());
    /// let header = IfMatch::parse("\"v1\", \"v2\"").expect("valid");
    /// assert!(header.is_satisfied_by(Some(&current)));
    /// assert!(!IfMatch::Any.is_satisfied_by(None));
    /// ```
    #[must_use]
    pub fn is_satisfied_by(&self, current: Option<&EntityTag>) -> bool {
        match (self, current) {
            (Self::Any, current) => current.is_some(),
            (Self::EntityTags(_), None) => false,
            (Self::EntityTags(tags), Some(current)) => tags.iter().any(|tag| tag.strong_eq(current)),
        }
    }
}

impl IfNoneMatch {
    /// Whether the request may proceed. A `false` result means `304 Not
    /// Modified` for safe methods and `412 Precondition Failed` otherwise.
    #[must_use]
    pub fn is_satisfied_by(&self, current: Option<&EntityTag>) -> bool {
        match (self, current) {
            (Self::Any, current) => current.is_none(),
            (Self::EntityTags(_), None) => true,
            (Self::EntityTags(tags), Some(current)) => !tags.iter().any(|tag| tag.strong_eq(current)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::HeaderCodec;
    use rstest::rstest;

    fn if_match(raw: &str) -> IfMatch {
        IfMatch::parse(raw).unwrap_or_else(|| panic!("If-Match {raw:?} should parse"))
    }

    fn if_none_match(raw: &str) -> IfNoneMatch {
        IfNoneMatch::parse(raw).unwrap_or_else(|| panic!("If-None-Match {raw:?} should parse"))
    }

    fn strong(tag: &str) -> EntityTag {
        EntityTag::Strong(tag.to_owned())
    }

    #[rstest]
    #[case("*", Some("a"), true)]
    #[case("*", None, false)]
    #[case("\"a\", \"b\"", Some("b"), true)]
    #[case("\"a\", \"b\"", Some("c"), false)]
    #[case("\"a\"", None, false)]
    #[case("", Some("a"), false)]
    fn if_match_outcomes(#[case] raw: &str, #[case] current: Option<&str>, #[case] expected: bool) {
        let current = current.map(strong);
        assert_eq!(if_match(raw).is_satisfied_by(current.as_ref()), expected);
    }

    #[rstest]
    #[case("*", Some("a"), false)]
    #[case("*", None, true)]
    #[case("\"a\", \"b\"", Some("b"), false)]
    #[case("\"a\", \"b\"", Some("c"), true)]
    #[case("\"a\"", None, true)]
    fn if_none_match_outcomes(#[case] raw: &str, #[case] current: Option<&str>, #[case] expected: bool) {
        let current = current.map(strong);
        assert_eq!(if_none_match(raw).is_satisfied_by(current.as_ref()), expected);
    }

    #[test]
    fn weak_current_tag_never_matches_strongly() {
        let weak = EntityTag::Weak("a".into());
        assert!(!if_match("\"a\"").is_satisfied_by(Some(&weak)));
        assert!(if_none_match("\"a\"").is_satisfied_by(Some(&weak)));
    }
}
