//! Data structures produced while encoding logo directories.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Identifier → encoded value, ordered by identifier so generated output is stable.
pub type AssetTable = BTreeMap<String, EncodedValue>;

/// Encoded representation of a single logo as it appears in the generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedValue {
  /// Plain `data:` URI emitted as a quoted string literal.
  Literal(String),
  /// zlib-compressed data URI, decompressed at runtime by the `unz` helper.
  Compressed {
    /// Standard base64 of the compressed bytes.
    payload: String,
    /// Number of compressed bytes.
    compressed_len: usize,
    /// Length of the uncompressed data URI string.
    original_len: usize,
  },
}

impl EncodedValue {
  /// Expression written on the right-hand side of the exported constant.
  pub fn render(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for EncodedValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Literal(uri) => write!(f, "'{uri}'"),
      Self::Compressed {
        payload,
        compressed_len,
        original_len,
      } => write!(
        f,
        "unz(';base64,{payload}', {compressed_len}, {original_len})"
      ),
    }
  }
}

/// A logo file that was turned into an exported constant.
#[derive(Debug, Clone)]
pub struct AssetRecord {
  /// Logo subfolder the file was found in.
  pub directory: String,
  /// File name including the extension.
  pub file_name: String,
  /// Extension after the final dot.
  pub extension: String,
  /// Generated constant name.
  pub identifier: String,
  /// Encoded value assigned to the constant.
  pub value: EncodedValue,
}

/// A file left out of the generated module because its extension has no MIME mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAsset {
  /// Logo subfolder the file was found in.
  pub directory: String,
  /// File name including the extension.
  pub file_name: String,
  /// Extension after the final dot.
  pub extension: String,
}

/// Everything the encoder produced for one logo subfolder.
#[derive(Debug, Default)]
pub struct EncodedDirectory {
  /// Records in the order the files were visited.
  pub records: Vec<AssetRecord>,
  /// Files that were skipped.
  pub skipped: Vec<SkippedAsset>,
}

impl EncodedDirectory {
  /// Collapse the records into an identifier-ordered table.
  pub fn table(&self) -> AssetTable {
    self
      .records
      .iter()
      .map(|record| (record.identifier.clone(), record.value.clone()))
      .collect()
  }
}

/// Per-directory summary returned by a pipeline run.
#[derive(Debug)]
pub struct DirectoryOutcome {
  /// Logo subfolder name.
  pub directory: String,
  /// Identifier → value table exported by the generated module.
  pub table: AssetTable,
  /// Files skipped due to an unknown extension.
  pub skipped: Vec<SkippedAsset>,
  /// Path of the generated module, when one was written.
  pub module_path: Option<PathBuf>,
  /// Identifiers not referenced by any consumer source.
  pub unreferenced: Vec<String>,
}

/// Summary of a successful pipeline run.
#[derive(Debug, Default)]
pub struct RunReport {
  /// One entry per processed logo subfolder, in processing order.
  pub directories: Vec<DirectoryOutcome>,
  /// Union of every directory table.
  pub global: AssetTable,
  /// File system paths that should trigger rerunning a build script when changed.
  pub rerun_paths: Vec<PathBuf>,
}
