//! Constant name derivation for logo files.

use std::sync::OnceLock;

use regex::Regex;

fn all_caps_word() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^[0-9A-Z]+$").expect("invalid all-caps regex"))
}

fn leading_caps_run() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^[0-9A-Z]{2,}[^a-z]").expect("invalid leading caps regex"))
}

/// Split a file name into its stem and the extension after the final dot.
///
/// A name without any dot is treated as all extension, leaving an empty stem.
pub fn split_file_name(file_name: &str) -> (&str, &str) {
  match file_name.rsplit_once('.') {
    Some((stem, extension)) => (stem, extension),
    None => ("", file_name),
  }
}

/// Convert arbitrary text into lowerCamelCase, splitting words on non-alphanumeric runs.
pub fn camel_case(value: &str) -> String {
  value
    .split(|c: char| !c.is_alphanumeric())
    .filter(|word| !word.is_empty())
    .enumerate()
    .map(|(index, word)| format_word(word, index == 0))
    .collect()
}

fn format_word(word: &str, first: bool) -> String {
  let normalised = if all_caps_word().is_match(word) {
    word.to_lowercase()
  } else {
    leading_caps_run()
      .replace(word, |caps: &regex::Captures<'_>| {
        let run = &caps[0];
        let boundary = run.char_indices().last().map_or(0, |(index, _)| index);
        let (head, last) = run.split_at(boundary);
        format!("{}{}", head.to_lowercase(), last.to_uppercase())
      })
      .into_owned()
  };

  let mut chars = normalised.chars();
  match chars.next() {
    Some(head) if first => head.to_lowercase().chain(chars).collect(),
    Some(head) => head.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Derive the exported constant name for a logo file.
///
/// The uppercased extension is appended so that `foo.png` and `foo.svg` in the same
/// directory never collide.
pub fn asset_identifier(directory: &str, stem: &str, extension: &str) -> String {
  format!(
    "{}{}",
    camel_case(&format!("{directory}_{stem}")),
    extension.to_uppercase()
  )
}
