//! The `conneg` inspector for HTTP negotiation and precondition headers.
//!
//! The binary wraps the `http-conneg` library so header values can be
//! checked from a shell:
//!
//! - `conneg parse <HEADER> <VALUE>` prints the normalised rendering and the
//!   structured value.
//! - `conneg negotiate <KIND> --header <VALUE> <AVAILABLE>...` prints the
//!   selected representation or `406 Not Acceptable`.
//! - `conneg check <if-match|if-none-match> <VALUE> [--etag <TAG>]` prints
//!   whether the precondition holds.
//!
//! # Configuration
//!
//! - `HTTP_CONNEG_LOG_LEVEL`: log verbosity (trace, debug, info, warn, error)
//! - `HTTP_CONNEG_STRICT`: fail on malformed header values
//!
//! # Example
//!
//! ```
//! use http_conneg_cli::cli::{Commands, NegotiationKind};
//! use http_conneg_cli::commands::{Outcome, run};
//! use http_conneg_cli::config::CliConfig;
//!
//! let command = Commands::Negotiate {
//!     kind: NegotiationKind::Encoding,
//!     header: "gzip, br;q=0.5".to_owned(),
//!     available: vec!["br".to_owned(), "gzip".to_owned()],
//! };
//! let mut out = Vec::new();
//! let outcome = run(&command, &CliConfig::default(), &mut out)?;
//! assert_eq!(outcome, Outcome::Accepted);
//! assert_eq!(out, b"gzip\n");
//! # Ok::<(), eyre::Report>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
mod output;
