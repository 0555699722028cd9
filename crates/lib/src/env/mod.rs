//! Ordered environment variable maps.
//!
//! An [`EnvMap`] is assembled through an [`EnvMapBuilder`], which enforces the
//! map invariants on every insert: names are non-empty snake_case and unique,
//! values are non-empty. Once finished the map cannot be mutated.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Errors raised while assembling an [`EnvMap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
  #[error("variable name is empty")]
  EmptyName,

  #[error("invalid variable name '{0}': expected lowercase letters, digits and underscores")]
  InvalidName(String),

  #[error("variable '{0}' has an empty value")]
  EmptyValue(String),

  #[error("variable '{0}' is defined more than once")]
  DuplicateName(String),

  #[error("alias '{alias}' refers to undefined variable '{source_name}'")]
  MissingSource { alias: String, source_name: String },
}

/// A single exported variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
  pub name: String,
  pub value: String,
}

/// Immutable, insertion-ordered mapping from variable name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
  entries: Vec<EnvEntry>,
}

impl EnvMap {
  pub fn builder() -> EnvMapBuilder {
    EnvMapBuilder::default()
  }

  /// Look up a value by name
  pub fn get(&self, name: &str) -> Option<&str> {
    self.entries.iter().find(|e| e.name == name).map(|e| e.value.as_str())
  }

  pub fn iter(&self) -> std::slice::Iter<'_, EnvEntry> {
    self.entries.iter()
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|e| e.name.as_str())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<'a> IntoIterator for &'a EnvMap {
  type Item = &'a EnvEntry;
  type IntoIter = std::slice::Iter<'a, EnvEntry>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

// Serialized as a JSON object whose keys keep definition order.
impl Serialize for EnvMap {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for entry in &self.entries {
      map.serialize_entry(&entry.name, &entry.value)?;
    }
    map.end()
  }
}

/// Incrementally builds an [`EnvMap`], validating each entry.
#[derive(Debug, Default)]
pub struct EnvMapBuilder {
  entries: Vec<EnvEntry>,
}

impl EnvMapBuilder {
  /// Append a variable. Fails without modifying the builder if the entry
  /// would break a map invariant.
  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<&mut Self, EnvError> {
    let name = name.into();
    let value = value.into();

    validate_name(&name)?;
    if value.is_empty() {
      return Err(EnvError::EmptyValue(name));
    }
    if self.entries.iter().any(|e| e.name == name) {
      return Err(EnvError::DuplicateName(name));
    }

    self.entries.push(EnvEntry { name, value });
    Ok(self)
  }

  /// Value of an already inserted variable
  pub fn get(&self, name: &str) -> Option<&str> {
    self.entries.iter().find(|e| e.name == name).map(|e| e.value.as_str())
  }

  /// Append `alias` carrying the value of the already inserted `source`.
  pub fn alias(&mut self, alias: &str, source: &str) -> Result<&mut Self, EnvError> {
    let value = self
      .get(source)
      .ok_or_else(|| EnvError::MissingSource {
        alias: alias.to_string(),
        source_name: source.to_string(),
      })?
      .to_string();
    self.insert(alias, value)
  }

  pub fn finish(self) -> EnvMap {
    EnvMap { entries: self.entries }
  }
}

fn validate_name(name: &str) -> Result<(), EnvError> {
  if name.is_empty() {
    return Err(EnvError::EmptyName);
  }
  let valid = name
    .chars()
    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
  if !valid || name.starts_with(|c: char| c.is_ascii_digit()) {
    return Err(EnvError::InvalidName(name.to_string()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preserves_insertion_order() {
    let mut builder = EnvMap::builder();
    builder.insert("zeta", "1").unwrap().insert("alpha", "2").unwrap();
    let map = builder.finish();

    assert_eq!(map.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    assert_eq!(map.get("alpha"), Some("2"));
    assert_eq!(map.len(), 2);
  }

  #[test]
  fn rejects_empty_value() {
    let mut builder = EnvMap::builder();
    let err = builder.insert("node_version", "").unwrap_err();
    assert_eq!(err, EnvError::EmptyValue("node_version".to_string()));
    assert!(builder.finish().is_empty());
  }

  #[test]
  fn rejects_duplicate_name() {
    let mut builder = EnvMap::builder();
    builder.insert("arch", "x64").unwrap();
    let err = builder.insert("arch", "ia32").unwrap_err();
    assert_eq!(err, EnvError::DuplicateName("arch".to_string()));

    let map = builder.finish();
    assert_eq!(map.get("arch"), Some("x64"));
  }

  #[test]
  fn rejects_bad_names() {
    let mut builder = EnvMap::builder();
    assert_eq!(builder.insert("", "x").unwrap_err(), EnvError::EmptyName);
    assert!(matches!(builder.insert("Node_Arch", "x"), Err(EnvError::InvalidName(_))));
    assert!(matches!(builder.insert("npm-config", "x"), Err(EnvError::InvalidName(_))));
    assert!(matches!(builder.insert("1st", "x"), Err(EnvError::InvalidName(_))));
  }

  #[test]
  fn alias_copies_source_value() {
    let mut builder = EnvMap::builder();
    builder.insert("node_arch", "x64").unwrap().alias("npm_config_arch", "node_arch").unwrap();
    let map = builder.finish();
    assert_eq!(map.get("npm_config_arch"), Some("x64"));
    assert_eq!(map.names().last(), Some("npm_config_arch"));
  }

  #[test]
  fn alias_of_undefined_variable_names_the_source() {
    let mut builder = EnvMap::builder();
    let err = builder.alias("npm_config_target", "version").unwrap_err();
    assert_eq!(
      err,
      EnvError::MissingSource {
        alias: "npm_config_target".to_string(),
        source_name: "version".to_string(),
      }
    );
    assert!(err.to_string().contains("undefined variable 'version'"));
    assert!(builder.finish().is_empty());
  }

  #[test]
  fn serializes_as_ordered_object() {
    let mut builder = EnvMap::builder();
    builder.insert("b", "2").unwrap().insert("a", "1").unwrap();
    let json = serde_json::to_string(&builder.finish()).unwrap();
    assert_eq!(json, r#"{"b":"2","a":"1"}"#);
  }
}
