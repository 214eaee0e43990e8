//! Report formatting and printing utilities.
//!
//! Every function writes to a caller-supplied writer so output can be
//! captured in tests. Separate from core logic so the library never prints.

use std::{io::Write, path::PathBuf};

use colored::Colorize;

use crate::core::{Extraction, SyncOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print one notice per source file that no scanner handles.
///
/// The notice is intentionally uncolored: `<file>: unsupported file type`.
pub fn print_skipped_to<W: Write>(skipped: &[PathBuf], writer: &mut W) {
    for path in skipped {
        let _ = writeln!(writer, "{}: unsupported file type", path.display());
    }
}

/// Print the status line for one synced catalog, plus the added keys when
/// `verbose` is set.
pub fn print_outcome_to<W: Write>(outcome: &SyncOutcome, verbose: bool, writer: &mut W) {
    let added = outcome.added.len();
    let keys = format!("{} {}", added, plural(added, "key", "keys"));
    let status = match (outcome.created, added, outcome.written) {
        (false, 0, _) => "up to date".to_string(),
        (true, _, true) => format!("created with {}", keys),
        (true, _, false) => format!("would be created with {}", keys),
        (false, _, true) => format!("{} added", keys),
        (false, _, false) => format!("would add {}", keys),
    };

    let _ = writeln!(
        writer,
        "{} {}: {}",
        SUCCESS_MARK.green(),
        outcome.path.display(),
        status
    );

    if verbose {
        for key in &outcome.added {
            let _ = writeln!(writer, "    {} {}", "+".green(), key);
        }
    }
}

/// Print the closing summary line.
pub fn print_summary_to<W: Write>(extraction: &Extraction, catalogs: usize, writer: &mut W) {
    let files = extraction.scanned_files.len();
    let keys = extraction.key_count();
    let mut msg = format!(
        "Scanned {} source {}, found {} {}",
        files,
        plural(files, "file", "files"),
        keys,
        plural(keys, "key", "keys")
    );
    if catalogs > 0 {
        msg.push_str(&format!(
            ", synced {} {}",
            catalogs,
            plural(catalogs, "catalog", "catalogs")
        ));
    }
    let _ = writeln!(writer, "{}", msg.dimmed());
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
