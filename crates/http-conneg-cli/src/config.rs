//! Tool configuration read from environment variables.
//!
//! Every setting can be supplied through a variable prefixed with
//! `HTTP_CONNEG_` and overridden on the command line.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "HTTP_CONNEG_LOG_LEVEL";
/// Variable enabling strict header handling.
pub const STRICT_VAR: &str = "HTTP_CONNEG_STRICT";

/// Log level matching the `tracing` levels. Defaults to `Warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Per-entry negotiation steps.
    Trace,
    /// Rejected headers and negotiation outcomes.
    Debug,
    /// Informational messages.
    Info,
    /// Recoverable problems such as a malformed header in permissive mode.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// The matching `EnvFilter` directive.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, CliError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CliError::InvalidConfig(format!(
            "invalid {name} value '{raw}', expected true or false"
        ))),
    }
}

/// Configuration for one `conneg` run.
///
/// # Environment Variables
///
/// - `HTTP_CONNEG_LOG_LEVEL`: trace, debug, info, warn or error
/// - `HTTP_CONNEG_STRICT`: treat malformed headers as errors instead of
///   absent values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliConfig {
    /// Verbosity of the stderr log.
    pub log_level: LogLevel,
    /// Fail on malformed header values rather than treating them as absent.
    pub strict: bool,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidConfig`] if a variable holds an invalid
    /// value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value. Missing variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidConfig`] if a variable holds an invalid
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        let strict = match lookup(STRICT_VAR) {
            Some(val) => parse_flag(STRICT_VAR, &val)?,
            None => false,
        };
        Ok(Self { log_level, strict })
    }

    /// Apply command line overrides, which take precedence over the
    /// environment.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, strict: Option<bool>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(strict) = strict {
            self.strict = strict;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_case_insensitively(#[case] raw: &str, #[case] expected: LogLevel) {
        assert_eq!(raw.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_unknown_values() {
        let Err(err) = "loud".parse::<LogLevel>() else {
            panic!("'loud' should not parse as a log level");
        };
        assert!(err.to_string().contains("unknown log level"));
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = CliConfig::from_lookup(lookup_in(&[])).ok();
        assert_eq!(config, Some(CliConfig::default()));
    }

    #[test]
    fn reads_both_variables() {
        let config =
            CliConfig::from_lookup(lookup_in(&[(LOG_LEVEL_VAR, "debug"), (STRICT_VAR, "yes")])).ok();
        assert_eq!(
            config,
            Some(CliConfig {
                log_level: LogLevel::Debug,
                strict: true,
            })
        );
    }

    #[rstest]
    #[case(LOG_LEVEL_VAR, "chatty")]
    #[case(STRICT_VAR, "maybe")]
    fn rejects_invalid_values(#[case] name: &str, #[case] value: &str) {
        assert!(matches!(
            CliConfig::from_lookup(lookup_in(&[(name, value)])),
            Err(CliError::InvalidConfig(_))
        ));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig {
            log_level: LogLevel::Error,
            strict: true,
        }
        .apply_overrides(Some(LogLevel::Trace), None);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(config.strict);

        let config = CliConfig::default().apply_overrides(None, Some(true));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.strict);
    }
}
