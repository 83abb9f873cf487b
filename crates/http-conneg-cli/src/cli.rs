//! Command line surface of `conneg`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LogLevel;

/// Inspect HTTP negotiation and precondition headers.
#[derive(Parser, Debug)]
#[command(name = "conneg", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// Fail on malformed header values instead of treating them as absent.
    #[arg(long, global = true)]
    pub strict: bool,
    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Parse a header value and print its normalised form.
    Parse {
        /// Which header the value belongs to.
        header: HeaderName,
        /// The raw field value.
        value: String,
    },
    /// Choose among available representations.
    Negotiate {
        /// Which dimension to negotiate.
        kind: NegotiationKind,
        /// The request's field value for that dimension.
        #[arg(long)]
        header: String,
        /// Representations the server can produce, in server order.
        #[arg(required = true)]
        available: Vec<String>,
    },
    /// Evaluate a conditional request header.
    Check {
        /// Which precondition to evaluate.
        condition: ConditionKind,
        /// The raw field value.
        value: String,
        /// Quoted entity tag of the current representation; omit when the
        /// resource has none.
        #[arg(long)]
        etag: Option<String>,
    },
}

/// Header fields understood by `parse`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderName {
    /// `Accept`
    Accept,
    /// `Accept-Charset`
    AcceptCharset,
    /// `Accept-Encoding`
    AcceptEncoding,
    /// `Accept-Language`
    AcceptLanguage,
    /// `If-Match`
    IfMatch,
    /// `If-None-Match`
    IfNoneMatch,
}

/// Negotiable dimensions, each paired with its request header.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationKind {
    /// `Accept` against concrete media types.
    MediaType,
    /// `Accept-Charset` against charset names.
    Charset,
    /// `Accept-Encoding` against content codings.
    Encoding,
    /// `Accept-Language` against language tags.
    Language,
}

/// Conditional request headers understood by `check`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    /// `If-Match`
    IfMatch,
    /// `If-None-Match`
    IfNoneMatch,
}
