//! `conneg` binary entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use http_conneg_cli::cli::Cli;
use http_conneg_cli::commands::run;
use http_conneg_cli::config::CliConfig;
use http_conneg_cli::error::CliError;
use http_conneg_cli::logging::init_logging;

/// Exit status for usage, configuration and I/O failures.
const FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(FAILURE);
        }
    };
    init_logging(&config);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), ?config, "starting conneg");

    let mut stdout = io::stdout().lock();
    let result = run(&cli.command, &config, &mut stdout)
        .inspect_err(|e| tracing::error!("conneg failed: {e:#}"));
    let Ok(outcome) = result else {
        return ExitCode::from(FAILURE);
    };
    ExitCode::from(outcome.exit_code())
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level, cli.strict.then_some(true)))
}
