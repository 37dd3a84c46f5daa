//! Rendering and writing the generated logo modules.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{PipelineResult, io_error};
use crate::models::AssetTable;

/// Settings that shape the text of a generated module.
#[derive(Debug, Clone)]
pub struct ModuleTemplate<'a> {
  /// Comment lines at the top of the file.
  pub license_header: &'a [String],
  /// Name recorded in the auto-generated marker.
  pub generator_name: &'a str,
  /// Import path for the runtime `unz` helper; `None` when payloads are not compressed.
  pub decompress_import: Option<&'a str>,
}

impl<'a> ModuleTemplate<'a> {
  /// Build the template from project configuration.
  pub fn from_config(config: &'a ProjectConfig) -> Self {
    Self {
      license_header: &config.license_header,
      generator_name: &config.generator_name,
      decompress_import: config
        .with_zlib
        .then_some(config.decompress_import.as_str()),
    }
  }
}

/// Render the module source exporting one constant per table entry, sorted by identifier.
pub fn render_module(template: &ModuleTemplate<'_>, table: &AssetTable) -> String {
  let header = template.license_header.join("\n");
  let import = match template.decompress_import {
    Some(path) => format!("\nimport {{ unz }} from '{path}';\n"),
    None => String::new(),
  };
  let exports = table
    .iter()
    .map(|(identifier, value)| format!("export const {identifier} = {value};"))
    .collect::<Vec<_>>()
    .join("\n");

  format!(
    "{header}\n\n// do not edit\n// auto-generated by {generator}\n{import}\n{exports}\n",
    generator = template.generator_name,
  )
}

/// Write the generated module into `dir` when the table has entries.
///
/// Returns the written path, or `None` for an empty table.
pub fn write_module(
  template: &ModuleTemplate<'_>,
  dir: &Path,
  generated_file: &str,
  table: &AssetTable,
) -> PipelineResult<Option<PathBuf>> {
  if table.is_empty() {
    return Ok(None);
  }

  let target = dir.join(generated_file);
  fs::write(&target, render_module(template, table)).map_err(io_error(&target))?;
  tracing::info!(path = %target.display(), entries = table.len(), "wrote logo module");
  Ok(Some(target))
}
