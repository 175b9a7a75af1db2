//! binop CLI library
//!
//! Argument parsing, configuration resolution, logging and the command
//! handlers behind the `binop` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{
    CalcArgs, CalcOutputFormat, Cli, Commands, ConfigArgs, ConfigOutputFormat, ReplayPolicyArg,
};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};

use binop_calculator::config::CalculatorConfig;
use tracing::debug;

/// Builds the CLI configuration from global flags
#[must_use]
pub fn build_cli_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_log_file(cli.log_file.clone())
}

/// Loads `--config` (or defaults) and applies `--replay-policy` on top
pub fn resolve_config(cli: &Cli) -> CliResult<CalculatorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading calculator config");
            CalculatorConfig::load(path)?
        }
        None => CalculatorConfig::default(),
    };

    if let Some(policy) = cli.replay_policy {
        config = config.with_replay_policy(policy.into());
    }
    Ok(config)
}
