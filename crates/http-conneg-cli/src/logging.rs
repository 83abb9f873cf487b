//! Structured logging on stderr.
//!
//! Records emitted by the library through the `log` facade are forwarded to
//! the same subscriber, so `--log-level debug` shows rejected header values
//! and negotiation outcomes.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the global subscriber.
///
/// Stdout carries command output, so logs always go to stderr. A second call
/// leaves the first subscriber in place.
pub fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
    if let Err(err) = result {
        tracing::trace!(error = %err, "logging already initialised");
    }
}
