//! Main run loop: extract once, then sync every requested catalog in order.
//!
//! Output for each step is printed as soon as the step finishes, so a fatal
//! error on a later catalog still leaves the earlier lines on screen.

use std::io::Write;

use anyhow::Result;

use super::{args::Arguments, report};
use crate::{
    config::Config,
    core::{Extraction, Extractor, SyncOptions, SyncOutcome, sync_catalog},
};

/// Everything one run produced.
#[derive(Debug)]
pub struct RunResult {
    pub extraction: Extraction,
    pub outcomes: Vec<SyncOutcome>,
}

pub fn run<W: Write>(args: &Arguments, config: &Config, writer: &mut W) -> Result<RunResult> {
    let extractor = Extractor::new(config)?;
    let extraction = extractor.extract(&args.files)?;
    report::print_skipped_to(&extraction.skipped_files, writer);

    let options = SyncOptions {
        indent: config.indent,
        dry_run: args.dry_run,
    };

    let mut outcomes = Vec::with_capacity(args.translations.len());
    for path in &args.translations {
        let outcome = sync_catalog(path, &extraction.keys, options)?;
        report::print_outcome_to(&outcome, args.verbose, writer);
        outcomes.push(outcome);
    }

    report::print_summary_to(&extraction, outcomes.len(), writer);

    Ok(RunResult {
        extraction,
        outcomes,
    })
}
