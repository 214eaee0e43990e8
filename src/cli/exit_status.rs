use std::process::ExitCode;

use crate::core::{MergeError, RecordError};

/// Exit status for the CLI.
///
/// - `Success` (0): Extraction and every catalog update completed
/// - `Failure` (1): A key tree is structurally inconsistent and needs manual fixing
/// - `Error` (2): Anything else went wrong (I/O, invalid JSON, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Extraction and every catalog update completed.
    Success,
    /// A catalog or the extracted keys are structurally inconsistent.
    Failure,
    /// Command failed due to internal error (I/O error, parse error, config error, etc.).
    Error,
}

impl ExitStatus {
    /// Pick the exit status for an error returned by the run.
    pub fn from_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<MergeError>().is_some() || err.downcast_ref::<RecordError>().is_some()
        {
            ExitStatus::Failure
        } else {
            ExitStatus::Error
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
