//! Project configuration loader describing the logo and consumer source layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "logos.config.json";

/// Discoverable project configuration describing where logos live and how they are emitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Relative path from the project root to the directory holding the logo subfolders.
  pub logos_dir: String,
  /// Logo subfolders processed in order.
  pub asset_dirs: Vec<String>,
  /// Relative path from the project root to the consumer sources.
  pub consumer_root: String,
  /// Consumer subfolders searched for references to generated identifiers.
  pub consumer_dirs: Vec<String>,
  /// File extension (without the dot) of consumer source files.
  pub consumer_extension: String,
  /// Name of the generated module written into each logo subfolder.
  pub generated_file: String,
  /// Emit zlib-compressed payloads behind an `unz(...)` call instead of plain literals.
  pub with_zlib: bool,
  /// zlib compression level used when `with_zlib` is enabled.
  pub compression_level: u32,
  /// Import path of the runtime `unz` helper, relative to the generated module.
  pub decompress_import: String,
  /// Name recorded in the "auto-generated by" marker.
  pub generator_name: String,
  /// Comment lines written at the very top of every generated module.
  pub license_header: Vec<String>,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      logos_dir: "packages/apps-config/src/ui/logos".into(),
      asset_dirs: ["extensions", "external", "chains", "nodes"]
        .into_iter()
        .map(String::from)
        .collect(),
      consumer_root: "packages/apps-config/src".into(),
      consumer_dirs: ["endpoints", "extensions", "links"]
        .into_iter()
        .map(String::from)
        .collect(),
      consumer_extension: "ts".into(),
      generated_file: "index.ts".into(),
      with_zlib: false,
      compression_level: 9,
      decompress_import: "../../../util".into(),
      generator_name: "logo-inliner".into(),
      license_header: vec![
        "// Copyright 2017-2023 @polkadot/apps-config authors & contributors".into(),
        "// SPDX-License-Identifier: Apache-2.0".into(),
      ],
    }
  }
}

impl ProjectConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fallback to default
  /// values so the generator keeps producing the historical layout.
  pub fn discover(root: &Path) -> Self {
    let candidate = root.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
      Ok(config) => Some(config),
      Err(err) => {
        tracing::warn!(path = %path.display(), error = %err, "ignoring unparsable config");
        None
      }
    }
  }

  /// Directory holding the logo subfolders.
  pub fn logos_dir_path(&self, root: &Path) -> PathBuf {
    root.join(&self.logos_dir)
  }

  /// Full path of one logo subfolder.
  pub fn asset_dir_path(&self, root: &Path, dir: &str) -> PathBuf {
    self.logos_dir_path(root).join(dir)
  }

  /// Full paths of every consumer source directory.
  pub fn consumer_dir_paths(&self, root: &Path) -> Vec<PathBuf> {
    let consumer_root = root.join(&self.consumer_root);
    self
      .consumer_dirs
      .iter()
      .map(|dir| consumer_root.join(dir))
      .collect()
  }
}
