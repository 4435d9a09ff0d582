//! Project and starter-project types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// A source-code project cloned into the workspace, unique by `name`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub name: String,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  /// Path relative to the workspace root to clone into.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub clone_path: Option<String>,

  #[serde(flatten)]
  pub source: Option<ProjectSource>,
}

/// A sample project offered to seed a fresh workspace, unique by `name`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterProject {
  pub name: String,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  /// Subdirectory of the source to use as the project root.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sub_dir: Option<String>,

  #[serde(flatten)]
  pub source: Option<ProjectSource>,
}

/// Where the project contents come from. All fields of both variants are
/// optional, so the same shape serves as its own override patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectSource {
  Git(GitSource),
  Zip(ZipSource),
}

impl ProjectSource {
  pub fn kind_name(&self) -> &'static str {
    match self {
      ProjectSource::Git(_) => "git",
      ProjectSource::Zip(_) => "zip",
    }
  }
}

/// A git source with one or more named remotes.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSource {
  /// Remote name to URL. Overrides upsert by remote name.
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub remotes: BTreeMap<String, String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub checkout_from: Option<CheckoutFrom>,
}

/// Which remote and revision to check out after cloning.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFrom {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub revision: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub remote: Option<String>,
}

/// A zip archive source.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipSource {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
}
