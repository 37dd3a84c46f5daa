//! Directory scanning that turns logo files into encoded records.

use std::fs;
use std::path::Path;

use crate::encoding::data_uri::{PayloadMode, encode_value};
use crate::encoding::identifier::{asset_identifier, split_file_name};
use crate::encoding::mime::mime_for_extension;
use crate::error::{PipelineResult, io_error};
use crate::models::{AssetRecord, EncodedDirectory, SkippedAsset};

/// Encode every logo file directly inside `dir`.
///
/// The generated module itself and anything that is not a regular file are ignored. Files
/// with an extension that has no MIME mapping are returned in `skipped` and never produce
/// a record. Entries are visited in file name order.
pub fn encode_directory(
  directory: &str,
  dir: &Path,
  generated_file: &str,
  mode: PayloadMode,
) -> PipelineResult<EncodedDirectory> {
  let mut file_names = Vec::new();
  for entry in fs::read_dir(dir).map_err(io_error(dir))? {
    let entry = entry.map_err(io_error(dir))?;
    let file_name = entry.file_name().to_string_lossy().into_owned();
    if file_name == generated_file {
      continue;
    }

    // lstat semantics: symlinks are not followed.
    let path = entry.path();
    let metadata = fs::symlink_metadata(&path).map_err(io_error(&path))?;
    if metadata.is_file() {
      file_names.push(file_name);
    }
  }
  file_names.sort();

  let mut encoded = EncodedDirectory::default();
  for file_name in file_names {
    let (stem, extension) = split_file_name(&file_name);
    let Some(mime) = mime_for_extension(extension) else {
      tracing::warn!(directory, file = %file_name, "no MIME mapping, skipping");
      encoded.skipped.push(SkippedAsset {
        directory: directory.to_string(),
        file_name: file_name.clone(),
        extension: extension.to_string(),
      });
      continue;
    };

    let path = dir.join(&file_name);
    let bytes = fs::read(&path).map_err(io_error(&path))?;
    let value = encode_value(mime, &bytes, mode).map_err(io_error(&path))?;
    let identifier = asset_identifier(directory, stem, extension);
    tracing::debug!(directory, file = %file_name, %identifier, bytes = bytes.len(), "encoded logo");

    encoded.records.push(AssetRecord {
      directory: directory.to_string(),
      extension: extension.to_string(),
      file_name,
      identifier,
      value,
    });
  }

  Ok(encoded)
}
