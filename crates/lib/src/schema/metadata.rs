//! Document metadata. Opaque to the resolution core: carried through
//! parsing and serialization untouched, never merged from ancestors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub provider: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub website: Option<String>,
}

impl Metadata {
  pub fn is_empty(&self) -> bool {
    self == &Metadata::default()
  }
}
