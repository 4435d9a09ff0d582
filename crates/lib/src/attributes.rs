//! Free-form attribute bags carried by devfile entities.
//!
//! Devfiles allow arbitrary string-keyed attributes on the document itself
//! and on every command, component, project and starter project. Values are
//! unconstrained JSON, so they are modeled as [`serde_json::Value`]. The core
//! treats the bag as opaque except for two uses: provenance tagging (see
//! [`crate::consts::IMPORTED_FROM_ATTRIBUTE`]) and attribute filtering on the
//! collection getters.

use std::collections::BTreeMap;

use serde_json::Value;

/// An entity's attribute bag.
///
/// Uses [`BTreeMap`] so serialization order is deterministic and round trips
/// are byte-stable.
pub type Attributes = BTreeMap<String, Value>;

/// Build an attribute bag holding a single string value.
pub fn string_attribute(key: &str, value: &str) -> Attributes {
  let mut attributes = Attributes::new();
  attributes.insert(key.to_string(), Value::String(value.to_string()));
  attributes
}

/// Check an entity's attributes against a filter.
///
/// Every filter key must be present on the entity with an equal value
/// (logical AND). A key missing from the entity always excludes it, so an
/// empty entity bag only matches an empty filter.
pub fn matches_filter(attributes: &Attributes, filter: &Attributes) -> bool {
  filter
    .iter()
    .all(|(key, expected)| attributes.get(key) == Some(expected))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn empty_filter_matches_everything() {
    assert!(matches_filter(&Attributes::new(), &Attributes::new()));
    assert!(matches_filter(&string_attribute("tier", "backend"), &Attributes::new()));
  }

  #[test]
  fn filter_is_and_across_keys() {
    let mut attributes = string_attribute("tier", "backend");
    attributes.insert("debug".to_string(), json!(true));

    let mut filter = string_attribute("tier", "backend");
    assert!(matches_filter(&attributes, &filter));

    filter.insert("debug".to_string(), json!(true));
    assert!(matches_filter(&attributes, &filter));

    filter.insert("missing".to_string(), json!("x"));
    assert!(!matches_filter(&attributes, &filter));
  }

  #[test]
  fn missing_key_excludes_entity() {
    let filter = string_attribute("tier", "backend");
    assert!(!matches_filter(&Attributes::new(), &filter));
  }

  #[test]
  fn value_mismatch_excludes_entity() {
    let attributes = string_attribute("tier", "backend");
    let filter = string_attribute("tier", "frontend");
    assert!(!matches_filter(&attributes, &filter));
  }
}
