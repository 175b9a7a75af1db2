//! Logging bootstrap
//!
//! `RUST_LOG` wins over the `-v`/`-q` level. The terminal UI owns the screen,
//! so in that mode logs go to `--log-file` or nowhere.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Filter from `RUST_LOG`, falling back to the verbosity level
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber.
///
/// With `screen_owned` set and no log file, nothing is installed.
pub fn init_logging(config: &CliConfig, screen_owned: bool) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false);

    let result = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if screen_owned => return Ok(()),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| CliError::logging(e.to_string()))
}
