//! Server-driven content negotiation (RFC 7231 §3.4.1).
//!
//! Every negotiable header uses the same greedy policy. Requested entries are
//! visited from the highest weight to the lowest (absent weights count as
//! `1`, ties keep their header order). The first entry that matches any
//! available value decides the outcome: the most specific of its matches is
//! returned and lower-weight entries are never consulted.

use std::cmp::Reverse;

use crate::headers::{
    Accept, AcceptCharset, AcceptEncoding, AcceptLanguage, LanguageTag, MediaType,
};
use crate::qvalue::Weight;
use crate::specificity::Specificity;

/// Greedy weight-ordered selection shared by all negotiators.
fn select<'a, R, A>(
    requested: &[R],
    weight_of: impl Fn(&R) -> Option<Weight>,
    available: &'a [A],
    specificity: impl Fn(&R, &A) -> Option<Specificity>,
) -> Option<&'a A> {
    let mut ranked: Vec<&R> = requested.iter().collect();
    // `sort_by_key` is stable, so equal weights keep header order.
    ranked.sort_by_key(|entry| Reverse(weight_of(entry).unwrap_or_default()));

    for (rank, entry) in ranked.into_iter().enumerate() {
        let mut best: Option<(Specificity, &'a A)> = None;
        for candidate in available {
            let Some(score) = specificity(entry, candidate) else {
                continue;
            };
            if best.is_none_or(|(current, _)| score > current) {
                best = Some((score, candidate));
            }
        }
        if let Some((score, chosen)) = best {
            log::trace!("requested entry #{rank} selected a candidate at {score:?}");
            return Some(chosen);
        }
        log::trace!("requested entry #{rank} matched nothing");
    }
    None
}

/// Pick the available media type that best satisfies `accept`.
///
/// Returns `None` when no requested range matches anything, which callers
/// usually answer with `406 Not Acceptable`.
///
/// # Examples
/// ```
/// use http_conneg::{Accept, HeaderCodec, MediaType, negotiate_media_type};
///
/// let available = [MediaType::new("application", "json")];
/// let accept = Accept::parse("text/html;q=0.5, */*;q=0.9").expect("valid");
/// assert_eq!(negotiate_media_type(&available, &accept), available.first());
/// ```
#[must_use]
pub fn negotiate_media_type<'a>(available: &'a [MediaType], accept: &Accept) -> Option<&'a MediaType> {
    let chosen = select(
        &accept.0,
        |item| item.weight,
        available,
        |item, candidate| item.media_range.match_specificity(candidate),
    );
    log_outcome("Accept", chosen);
    chosen
}

/// Pick the available charset that best satisfies `accept`.
#[must_use]
pub fn negotiate_charset<'a, S: AsRef<str>>(available: &'a [S], accept: &AcceptCharset) -> Option<&'a S> {
    let chosen = select(
        &accept.0,
        |item| item.weight,
        available,
        |item, candidate| item.charset.match_specificity(candidate.as_ref()),
    );
    log_outcome("Accept-Charset", chosen.map(<S as AsRef<str>>::as_ref));
    chosen
}

/// Pick the available content coding that best satisfies `accept`.
///
/// An empty `Accept-Encoding` list matches nothing.
///
/// # Examples
/// ```
/// use http_conneg::{AcceptEncoding, HeaderCodec, negotiate_encoding};
///
/// let accept = AcceptEncoding::parse("br;q=0.4, gzip").expect("valid");
/// assert_eq!(negotiate_encoding(&["br", "gzip"], &accept), Some(&"gzip"));
/// ```
#[must_use]
pub fn negotiate_encoding<'a, S: AsRef<str>>(available: &'a [S], accept: &AcceptEncoding) -> Option<&'a S> {
    let chosen = select(
        &accept.0,
        |item| item.weight,
        available,
        |item, candidate| item.encoding.match_specificity(candidate.as_ref()),
    );
    log_outcome("Accept-Encoding", chosen.map(<S as AsRef<str>>::as_ref));
    chosen
}

/// Pick the available language that best satisfies `accept`.
///
/// A primary-only range such as `en` also matches `en-GB`, ranked below an
/// exact match.
#[must_use]
pub fn negotiate_language<'a>(
    available: &'a [LanguageTag],
    accept: &AcceptLanguage,
) -> Option<&'a LanguageTag> {
    let chosen = select(
        &accept.0,
        |item| item.weight,
        available,
        |item, candidate| item.language.match_specificity(candidate),
    );
    log_outcome("Accept-Language", chosen);
    chosen
}

fn log_outcome<T: std::fmt::Display + ?Sized>(header: &str, chosen: Option<&T>) {
    chosen.map_or_else(
        || log::debug!("{header} negotiation found no acceptable representation"),
        |value| log::debug!("{header} negotiation selected {value}"),
    );
}
