//! Data URI construction and the optional zlib wrapper.

use std::io::Write;

use base64::{Engine as _, engine::general_purpose};
use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::models::EncodedValue;

/// How encoded payloads are emitted into the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
  /// Emit the data URI as a plain string literal.
  Plain,
  /// Compress the data URI with zlib at the given level and emit an `unz(...)` call.
  Zlib {
    /// zlib compression level, 0-9.
    level: u32,
  },
}

impl PayloadMode {
  /// Build the mode from the configuration toggle.
  pub fn from_flag(with_zlib: bool, level: u32) -> Self {
    if with_zlib {
      Self::Zlib { level: level.min(9) }
    } else {
      Self::Plain
    }
  }
}

/// Build `data:<mime>;base64,<payload>` for the raw file bytes.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
  format!(
    "data:{mime};base64,{}",
    general_purpose::STANDARD.encode(bytes)
  )
}

/// Encode a file's bytes as the value written into the generated module.
pub fn encode_value(mime: &str, bytes: &[u8], mode: PayloadMode) -> std::io::Result<EncodedValue> {
  let uri = data_uri(mime, bytes);
  match mode {
    PayloadMode::Plain => Ok(EncodedValue::Literal(uri)),
    PayloadMode::Zlib { level } => compress_data_uri(&uri, level),
  }
}

/// zlib-compress a data URI string and wrap the result for runtime decompression.
pub fn compress_data_uri(uri: &str, level: u32) -> std::io::Result<EncodedValue> {
  let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
  encoder.write_all(uri.as_bytes())?;
  let compressed = encoder.finish()?;

  Ok(EncodedValue::Compressed {
    payload: general_purpose::STANDARD.encode(&compressed),
    compressed_len: compressed.len(),
    original_len: uri.len(),
  })
}
