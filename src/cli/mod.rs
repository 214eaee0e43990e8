//! Command-line interface layer.

use std::{env, io};

use anyhow::{Context, Result};

use crate::config::load_config;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{RunResult, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd, args.config.as_deref())?;
    if let Some(source) = &loaded.source {
        tracing::debug!("using config file {}", source.display());
    }

    let mut config = loaded.config;
    if let Some(namespace) = &args.namespace {
        config.namespace = namespace.clone();
        config.validate().context("Invalid --namespace")?;
    }

    run(&args, &config, &mut io::stdout().lock())?;
    Ok(ExitStatus::Success)
}
