//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with the report printed on stdout.

use std::io;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `debug`.
pub const LOG_ENV_VAR: &str = "I18N_SYNC_LOG";

/// Initialize the global `tracing` subscriber.
///
/// `I18N_SYNC_LOG` takes precedence; otherwise only warnings are shown, or
/// debug output when `verbose` is set.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize logging: {}", err))?;

    Ok(())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,i18n_sync=debug" } else { "warn" }
}
