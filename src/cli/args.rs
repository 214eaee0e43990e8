//! CLI argument definitions using clap.
//!
//! ```text
//! i18n-sync [OPTIONS] <SOURCE_FILE>...
//! ```
//!
//! Every positional argument is a source file to scan. Each `-t` names a
//! catalog file to create or update with the keys found.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source file to scan for i18n statements
    #[arg(value_name = "SOURCE_FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Translation catalog file to create/update (can be repeated)
    #[arg(short = 't', long = "translation", value_name = "CATALOG_FILE")]
    pub translations: Vec<PathBuf>,

    /// Config file to use instead of searching for .i18nsyncrc.json
    #[arg(long, value_name = "PATH", env = "I18N_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Top-level catalog key the scanned keys live under (overrides config file)
    #[arg(long, value_name = "NAME")]
    pub namespace: Option<String>,

    /// Merge and report without writing any catalog
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
