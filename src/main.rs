use std::process::ExitCode;

use clap::Parser;
use i18n_sync::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = i18n_sync::logging::init_logging(args.verbose) {
        eprintln!("Error: {:#}", err);
        return ExitStatus::Error.into();
    }

    match i18n_sync::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::from_error(&err).into()
        }
    }
}
