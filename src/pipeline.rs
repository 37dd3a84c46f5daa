//! Run orchestrator encoding every logo directory and gating on duplicate values.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::diagnostics::DiagnosticSink;
use crate::duplicates::find_duplicates;
use crate::encoding::{PayloadMode, encode_directory};
use crate::error::{PipelineError, PipelineResult};
use crate::generation::{ModuleTemplate, write_module};
use crate::models::{AssetTable, DirectoryOutcome, RunReport};
use crate::references::{ConsumerSources, UnreferencedReport, find_unreferenced};

/// High-level helper driving a single generation run.
pub struct LogoPipeline<'a> {
  root: &'a Path,
  config: &'a ProjectConfig,
}

impl<'a> LogoPipeline<'a> {
  /// Create a pipeline resolving configured paths against `root`.
  pub fn new(root: &'a Path, config: &'a ProjectConfig) -> Self {
    Self { root, config }
  }

  /// Payload mode derived from the compression toggle.
  pub fn payload_mode(&self) -> PayloadMode {
    PayloadMode::from_flag(self.config.with_zlib, self.config.compression_level)
  }

  /// Process every logo directory in order, then fail if any two identifiers share a value.
  ///
  /// Modules for directories processed before the duplicate check stay on disk when it fails.
  pub fn run<D: DiagnosticSink>(&self, sink: &mut D) -> PipelineResult<RunReport> {
    let mut global = AssetTable::new();
    let mut directories = Vec::with_capacity(self.config.asset_dirs.len());

    for directory in &self.config.asset_dirs {
      let outcome = self.process_directory(directory, sink)?;
      global.extend(outcome.table.clone());
      directories.push(outcome);
    }

    let report = find_duplicates(&global);
    if !report.is_empty() {
      sink.duplicates(&report);
      return Err(PipelineError::DuplicateAssets { report });
    }

    tracing::info!(
      directories = directories.len(),
      assets = global.len(),
      "logo generation complete"
    );

    Ok(RunReport {
      directories,
      global,
      rerun_paths: self.rerun_paths(),
    })
  }

  /// Encode one logo directory, write its module and check its identifiers are referenced.
  pub fn process_directory<D: DiagnosticSink>(
    &self,
    directory: &str,
    sink: &mut D,
  ) -> PipelineResult<DirectoryOutcome> {
    let dir = self.config.asset_dir_path(self.root, directory);
    let encoded = encode_directory(
      directory,
      &dir,
      &self.config.generated_file,
      self.payload_mode(),
    )?;
    for skipped in &encoded.skipped {
      sink.unknown_mime(skipped);
    }

    let table = encoded.table();
    let template = ModuleTemplate::from_config(self.config);
    let module_path = write_module(&template, &dir, &self.config.generated_file, &table)?;

    let unreferenced = if table.is_empty() {
      Vec::new()
    } else {
      let sources = ConsumerSources::load(
        &self.config.consumer_dir_paths(self.root),
        &self.config.consumer_extension,
      )?;
      find_unreferenced(&table, &sources)
    };

    if !unreferenced.is_empty() {
      sink.unreferenced(&UnreferencedReport {
        directory: directory.to_string(),
        identifiers: unreferenced.clone(),
      });
    }

    Ok(DirectoryOutcome {
      directory: directory.to_string(),
      table,
      skipped: encoded.skipped,
      module_path,
      unreferenced,
    })
  }

  /// Directories whose contents determine the generated output.
  pub fn rerun_paths(&self) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = self
      .config
      .asset_dirs
      .iter()
      .map(|dir| self.config.asset_dir_path(self.root, dir))
      .collect();
    paths.extend(self.config.consumer_dir_paths(self.root));
    paths
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::duplicates::DuplicateReport;
  use crate::models::SkippedAsset;
  use std::fs;
  use tempfile::{TempDir, tempdir};

  #[derive(Default)]
  struct RecordingSink {
    unknown: Vec<SkippedAsset>,
    unreferenced: Vec<UnreferencedReport>,
    duplicates: Vec<DuplicateReport>,
  }

  impl DiagnosticSink for RecordingSink {
    fn unknown_mime(&mut self, skipped: &SkippedAsset) {
      self.unknown.push(skipped.clone());
    }

    fn unreferenced(&mut self, report: &UnreferencedReport) {
      self.unreferenced.push(report.clone());
    }

    fn duplicates(&mut self, report: &DuplicateReport) {
      self.duplicates.push(report.clone());
    }
  }

  fn config() -> ProjectConfig {
    ProjectConfig {
      logos_dir: "logos".into(),
      asset_dirs: vec!["extensions".into(), "chains".into(), "nodes".into()],
      consumer_root: "src".into(),
      consumer_dirs: vec!["endpoints".into(), "links".into()],
      ..ProjectConfig::default()
    }
  }

  fn project() -> TempDir {
    let dir = tempdir().unwrap();
    for sub in ["logos/extensions", "logos/chains", "logos/nodes", "src/endpoints", "src/links"] {
      fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    dir
  }

  fn write(root: &Path, relative: &str, contents: &[u8]) {
    fs::write(root.join(relative), contents).unwrap();
  }

  #[test]
  fn writes_modules_and_reports_unreferenced_identifiers() {
    let project = project();
    let root = project.path();
    write(root, "logos/chains/foo.png", b"foo");
    write(root, "logos/chains/bar.svg", b"<svg/>");
    write(root, "logos/nodes/baz.gif", b"GIF89a");
    write(root, "src/endpoints/production.ts", b"logo: chainsFooPNG");
    write(root, "src/links/index.ts", b"nodesBazGIF");

    let config = config();
    let mut sink = RecordingSink::default();
    let report = LogoPipeline::new(root, &config).run(&mut sink).unwrap();

    assert_eq!(report.global.len(), 3);
    assert_eq!(sink.unreferenced, vec![UnreferencedReport {
      directory: "chains".into(),
      identifiers: vec!["chainsBarSVG".into()],
    }]);
    assert!(sink.duplicates.is_empty());

    let chains = fs::read_to_string(root.join("logos/chains/index.ts")).unwrap();
    let bar = chains.find("export const chainsBarSVG").unwrap();
    let foo = chains.find("export const chainsFooPNG").unwrap();
    assert!(bar < foo);
    assert!(chains.contains("'data:image/png;base64,Zm9v'"));

    let extensions = &report.directories[0];
    assert!(extensions.module_path.is_none());
    assert!(!root.join("logos/extensions/index.ts").exists());
  }

  #[test]
  fn unknown_extension_is_reported_with_current_file_name() {
    let project = project();
    let root = project.path();
    write(root, "logos/chains/aaa.png", b"a");
    write(root, "logos/chains/logo.bmp", b"b");
    write(root, "logos/chains/zzz.png", b"z");

    let config = config();
    let mut sink = RecordingSink::default();
    let report = LogoPipeline::new(root, &config).run(&mut sink).unwrap();

    assert_eq!(sink.unknown.len(), 1);
    assert_eq!(sink.unknown[0].file_name, "logo.bmp");
    assert_eq!(sink.unknown[0].directory, "chains");
    assert!(!report.global.keys().any(|key| key.ends_with("BMP")));
  }

  #[test]
  fn duplicate_values_fail_after_earlier_modules_are_written() {
    let project = project();
    let root = project.path();
    write(root, "logos/chains/foo.png", b"same");
    write(root, "logos/nodes/foo.png", b"same");

    let config = config();
    let mut sink = RecordingSink::default();
    let err = LogoPipeline::new(root, &config).run(&mut sink).unwrap_err();

    let PipelineError::DuplicateAssets { report } = err else {
      panic!("expected duplicate failure");
    };
    assert_eq!(report.peers("chainsFooPNG"), Some(&["nodesFooPNG".to_string()][..]));
    assert_eq!(report.peers("nodesFooPNG"), Some(&["chainsFooPNG".to_string()][..]));
    assert_eq!(sink.duplicates.len(), 1);
    assert!(root.join("logos/chains/index.ts").exists());
    assert!(root.join("logos/nodes/index.ts").exists());
  }

  #[test]
  fn duplicate_error_message_is_fatal() {
    let project = project();
    let root = project.path();
    write(root, "logos/chains/a.svg", b"<svg/>");
    write(root, "logos/chains/b.svg", b"<svg/>");

    let config = config();
    let err = LogoPipeline::new(root, &config)
      .run(&mut RecordingSink::default())
      .unwrap_err();
    assert_eq!(err.to_string(), "FATAL: 2 dupes found");
  }

  #[test]
  fn same_bytes_in_different_formats_are_not_duplicates() {
    let project = project();
    let root = project.path();
    write(root, "logos/chains/foo.png", b"same");
    write(root, "logos/chains/foo.gif", b"same");

    let config = config();
    let report = LogoPipeline::new(root, &config)
      .run(&mut RecordingSink::default())
      .unwrap();
    assert_eq!(report.global.len(), 2);
  }

  #[test]
  fn regeneration_is_idempotent() {
    let project = project();
    let root = project.path();
    write(root, "logos/chains/foo.png", b"foo");
    write(root, "logos/chains/bar.svg", b"bar");

    let mut config = config();
    config.with_zlib = true;
    let pipeline = LogoPipeline::new(root, &config);

    pipeline.run(&mut RecordingSink::default()).unwrap();
    let first = fs::read(root.join("logos/chains/index.ts")).unwrap();
    pipeline.run(&mut RecordingSink::default()).unwrap();
    let second = fs::read(root.join("logos/chains/index.ts")).unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("import { unz } from '../../../util';"));
    assert!(text.contains("export const chainsFooPNG = unz(';base64,"));
  }

  #[test]
  fn missing_logo_directory_aborts_the_run() {
    let project = project();
    let root = project.path();
    fs::remove_dir_all(root.join("logos/nodes")).unwrap();

    let config = config();
    let err = LogoPipeline::new(root, &config)
      .run(&mut RecordingSink::default())
      .unwrap_err();
    assert!(matches!(err, PipelineError::Io { .. }));
  }

  #[test]
  fn rerun_paths_cover_logo_and_consumer_directories() {
    let config = config();
    let pipeline = LogoPipeline::new(Path::new("/repo"), &config);
    assert_eq!(pipeline.rerun_paths(), vec![
      PathBuf::from("/repo/logos/extensions"),
      PathBuf::from("/repo/logos/chains"),
      PathBuf::from("/repo/logos/nodes"),
      PathBuf::from("/repo/src/endpoints"),
      PathBuf::from("/repo/src/links"),
    ]);
  }
}
