//! Command dispatch for `conneg`.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use eyre::{Context, Result};
use http_conneg::{
    Accept, AcceptCharset, AcceptEncoding, AcceptLanguage, EntityTag, GrammarError, HeaderCodec,
    IfMatch, IfNoneMatch, LanguageTag, MediaType, negotiate_charset, negotiate_encoding,
    negotiate_language, negotiate_media_type,
};

use crate::cli::{Commands, ConditionKind, HeaderName, NegotiationKind};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{write_absent, write_parsed, write_precondition, write_selection};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The header parsed, a representation was selected, or the precondition
    /// held.
    Accepted,
    /// Negotiation found nothing acceptable or the precondition failed.
    Rejected,
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Accepted => 0,
            Self::Rejected => 1,
        }
    }
}

/// Run `command`, writing results to `out`.
///
/// # Errors
///
/// Returns an error when an argument cannot be parsed, when a header is
/// malformed in strict mode, or when writing to `out` fails.
pub fn run(command: &Commands, config: &CliConfig, out: &mut dyn Write) -> Result<Outcome> {
    let outcome = match command {
        Commands::Parse { header, value } => handle_parse(*header, value, config.strict, out)?,
        Commands::Negotiate {
            kind,
            header,
            available,
        } => handle_negotiate(*kind, header, available, config.strict, out)?,
        Commands::Check {
            condition,
            value,
            etag,
        } => handle_check(*condition, value, etag.as_deref(), config.strict, out)?,
    };
    out.flush().wrap_err("failed to flush output")?;
    Ok(outcome)
}

/// Decode a header, treating a malformed value as absent unless `strict`.
fn decode_header<H: HeaderCodec>(raw: &str, strict: bool) -> Result<Option<H>, CliError> {
    match H::decode(raw) {
        Ok(value) => Ok(Some(value)),
        Err(source) if strict => Err(CliError::MalformedHeader {
            header: H::NAME,
            source,
        }),
        Err(err) => {
            tracing::warn!(header = H::NAME, error = %err, "treating malformed value as absent");
            Ok(None)
        }
    }
}

fn handle_parse(header: HeaderName, raw: &str, strict: bool, out: &mut dyn Write) -> Result<Outcome> {
    match header {
        HeaderName::Accept => describe::<Accept>(raw, strict, out),
        HeaderName::AcceptCharset => describe::<AcceptCharset>(raw, strict, out),
        HeaderName::AcceptEncoding => describe::<AcceptEncoding>(raw, strict, out),
        HeaderName::AcceptLanguage => describe::<AcceptLanguage>(raw, strict, out),
        HeaderName::IfMatch => describe::<IfMatch>(raw, strict, out),
        HeaderName::IfNoneMatch => describe::<IfNoneMatch>(raw, strict, out),
    }
}

fn describe<H: HeaderCodec + fmt::Debug>(raw: &str, strict: bool, out: &mut dyn Write) -> Result<Outcome> {
    match decode_header::<H>(raw, strict)? {
        Some(value) => write_parsed(out, H::NAME, &value.render(), &value)?,
        None => write_absent(out, H::NAME)?,
    }
    Ok(Outcome::Accepted)
}

fn parse_available<T>(values: &[String]) -> Result<Vec<T>, CliError>
where
    T: FromStr<Err = GrammarError>,
{
    values
        .iter()
        .map(|value| {
            value.parse().map_err(|source| CliError::InvalidAvailable {
                value: value.clone(),
                source,
            })
        })
        .collect()
}

/// Negotiate with `accept`, or take the first available value when the
/// header was treated as absent.
fn choose<'a, T, H>(
    available: &'a [T],
    accept: Option<H>,
    negotiate: impl Fn(&'a [T], &H) -> Option<&'a T>,
) -> Option<&'a T> {
    accept.map_or_else(|| available.first(), |accept| negotiate(available, &accept))
}

fn handle_negotiate(
    kind: NegotiationKind,
    raw: &str,
    available: &[String],
    strict: bool,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let selected = match kind {
        NegotiationKind::MediaType => {
            let types = parse_available::<MediaType>(available)?;
            let accept = decode_header::<Accept>(raw, strict)?;
            choose(&types, accept, negotiate_media_type).map(ToString::to_string)
        }
        NegotiationKind::Charset => {
            let accept = decode_header::<AcceptCharset>(raw, strict)?;
            choose(available, accept, negotiate_charset::<String>).cloned()
        }
        NegotiationKind::Encoding => {
            let accept = decode_header::<AcceptEncoding>(raw, strict)?;
            choose(available, accept, negotiate_encoding::<String>).cloned()
        }
        NegotiationKind::Language => {
            let tags = parse_available::<LanguageTag>(available)?;
            let accept = decode_header::<AcceptLanguage>(raw, strict)?;
            choose(&tags, accept, negotiate_language).map(ToString::to_string)
        }
    };
    write_selection(out, selected.as_deref())?;
    Ok(if selected.is_some() {
        Outcome::Accepted
    } else {
        Outcome::Rejected
    })
}

fn handle_check(
    condition: ConditionKind,
    raw: &str,
    etag: Option<&str>,
    strict: bool,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let current = etag
        .map(|value| {
            value.parse::<EntityTag>().map_err(|source| CliError::InvalidEntityTag {
                value: value.to_owned(),
                source,
            })
        })
        .transpose()?;
    // An absent header places no condition on the request.
    let holds = match condition {
        ConditionKind::IfMatch => decode_header::<IfMatch>(raw, strict)?
            .is_none_or(|header| header.is_satisfied_by(current.as_ref())),
        ConditionKind::IfNoneMatch => decode_header::<IfNoneMatch>(raw, strict)?
            .is_none_or(|header| header.is_satisfied_by(current.as_ref())),
    };
    write_precondition(out, holds)?;
    Ok(if holds {
        Outcome::Accepted
    } else {
        Outcome::Rejected
    })
}
