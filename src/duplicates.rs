//! Detection of identifiers that resolve to the same encoded value.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::AssetTable;

/// Every identifier sharing its value with at least one other, mapped to those peers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
  entries: BTreeMap<String, Vec<String>>,
}

impl DuplicateReport {
  /// Number of offending identifiers.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no duplicates were found.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Peers of a given identifier, if it is a duplicate.
  pub fn peers(&self, identifier: &str) -> Option<&[String]> {
    self.entries.get(identifier).map(Vec::as_slice)
  }

  /// Iterate identifiers and their peers in identifier order.
  pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
    self.entries.iter()
  }
}

impl fmt::Display for DuplicateReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "\n {} dupes found", self.len())?;
    for (identifier, peers) in &self.entries {
      writeln!(f, "\t {identifier:>20}  ::  {}", peers.join(", "))?;
    }
    Ok(())
  }
}

/// Group the table by rendered value and report every identifier that shares one.
///
/// Equality is on the rendered expression, so a compressed and a plain value never match.
pub fn find_duplicates(table: &AssetTable) -> DuplicateReport {
  let mut by_value: BTreeMap<String, Vec<&String>> = BTreeMap::new();
  for (identifier, value) in table {
    by_value.entry(value.render()).or_default().push(identifier);
  }

  let mut entries = BTreeMap::new();
  for group in by_value.values().filter(|group| group.len() > 1) {
    for identifier in group {
      let peers = group
        .iter()
        .filter(|peer| *peer != identifier)
        .map(|peer| (*peer).clone())
        .collect();
      entries.insert((*identifier).clone(), peers);
    }
  }

  DuplicateReport { entries }
}
