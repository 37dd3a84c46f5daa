//! Sinks receiving the advisory and fatal diagnostics produced during a run.

use crate::duplicates::DuplicateReport;
use crate::models::SkippedAsset;
use crate::references::UnreferencedReport;

/// Receiver for diagnostics raised while the pipeline runs.
pub trait DiagnosticSink {
  /// A file was skipped because its extension has no MIME mapping.
  fn unknown_mime(&mut self, skipped: &SkippedAsset);

  /// Some generated identifiers of a directory are not referenced by consumer sources.
  fn unreferenced(&mut self, report: &UnreferencedReport);

  /// Duplicate values were found; the run fails right after this call.
  fn duplicates(&mut self, report: &DuplicateReport);
}

/// Prints diagnostics to the terminal: unknown MIME types to stderr, everything else to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
  fn unknown_mime(&mut self, skipped: &SkippedAsset) {
    eprintln!(
      "Unable to determine mime for {}/{}",
      skipped.directory, skipped.file_name
    );
  }

  fn unreferenced(&mut self, report: &UnreferencedReport) {
    println!("{report}");
  }

  fn duplicates(&mut self, report: &DuplicateReport) {
    print!("{report}");
  }
}
