//! Cross-referencing generated identifiers against consumer sources.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PipelineResult, io_error};
use crate::models::AssetTable;

/// Concatenated text of every consumer source file.
#[derive(Debug, Default)]
pub struct ConsumerSources {
  text: String,
  files: usize,
}

impl ConsumerSources {
  /// Read every regular file ending in `.<extension>` directly inside each directory.
  ///
  /// Files are concatenated in directory order, then file name order.
  pub fn load(dirs: &[PathBuf], extension: &str) -> PipelineResult<Self> {
    let suffix = format!(".{extension}");
    let mut sources = Self::default();

    for dir in dirs {
      let mut paths = Vec::new();
      for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();
        let is_file = fs::symlink_metadata(&path)
          .map_err(io_error(&path))?
          .is_file();
        if is_file && entry.file_name().to_string_lossy().ends_with(&suffix) {
          paths.push(path);
        }
      }
      paths.sort();

      for path in paths {
        sources.push_file(&path)?;
      }
    }

    tracing::debug!(files = sources.files, bytes = sources.text.len(), "loaded consumer sources");
    Ok(sources)
  }

  fn push_file(&mut self, path: &Path) -> PipelineResult<()> {
    let bytes = fs::read(path).map_err(io_error(path))?;
    self.text.push_str(&String::from_utf8_lossy(&bytes));
    self.files += 1;
    Ok(())
  }

  /// Whether `identifier` occurs verbatim anywhere in the sources.
  pub fn references(&self, identifier: &str) -> bool {
    self.text.contains(identifier)
  }

  /// Number of files read.
  pub fn file_count(&self) -> usize {
    self.files
  }
}

/// Identifiers of `table` that no consumer source mentions, in identifier order.
pub fn find_unreferenced(table: &AssetTable, sources: &ConsumerSources) -> Vec<String> {
  table
    .keys()
    .filter(|identifier| !sources.references(identifier))
    .cloned()
    .collect()
}

/// Advisory listing of unreferenced identifiers for one logo directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreferencedReport {
  /// Logo subfolder name.
  pub directory: String,
  /// Identifiers that were not found.
  pub identifiers: Vec<String>,
}

impl fmt::Display for UnreferencedReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "\n {:<10}  ::  {} not referenced \n\t {} \n",
      self.directory,
      self.identifiers.len(),
      self.identifiers.join(", ")
    )
  }
}
