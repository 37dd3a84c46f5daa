/// Extensions that can be inlined, paired with the MIME type used in the data URI.
pub const MIME_TYPES: &[(&str, &str)] = &[
  ("gif", "image/gif"),
  ("png", "image/png"),
  ("svg", "image/svg+xml"),
];

/// Look up the MIME type for a file extension. Matching is case-sensitive.
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
  MIME_TYPES
    .iter()
    .find(|(ext, _)| *ext == extension)
    .map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
  use super::mime_for_extension;

  #[test]
  fn maps_supported_extensions() {
    assert_eq!(mime_for_extension("gif"), Some("image/gif"));
    assert_eq!(mime_for_extension("png"), Some("image/png"));
    assert_eq!(mime_for_extension("svg"), Some("image/svg+xml"));
  }

  #[test]
  fn rejects_unknown_and_differently_cased_extensions() {
    assert_eq!(mime_for_extension("bmp"), None);
    assert_eq!(mime_for_extension("jpeg"), None);
    assert_eq!(mime_for_extension("PNG"), None);
    assert_eq!(mime_for_extension(""), None);
  }
}
