//! Error types surfaced by the logo pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::DuplicateReport;

/// Failures that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
  /// Reading or writing a file on disk failed.
  #[error("failed to access {}: {source}", path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// Two or more identifiers resolved to byte-identical encoded values.
  #[error("FATAL: {} dupes found", report.len())]
  DuplicateAssets {
    /// Every offending identifier with its equal-valued peers.
    report: DuplicateReport,
  },
}

/// Result alias used across the crate.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Attach the offending path to an I/O error.
pub(crate) fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PipelineError + '_ {
  move |source| PipelineError::Io {
    path: path.to_path_buf(),
    source,
  }
}
