//! Import references: where an ancestor devfile comes from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to an external devfile: an absolute or relative URI, a
/// registry entry (`id` + `registryUrl`), or an in-cluster custom resource.
///
/// Exactly one of `uri`, `id` or `kubernetes` is expected to be set; the
/// populated choice is exposed through [`ImportReference::source`]. Two
/// references are the same point of origin only if structurally equal
/// (derived `PartialEq`), which is what cycle detection compares.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReference {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uri: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,

  /// Registry to look `id` up in. Only meaningful together with `id`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub registry_url: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kubernetes: Option<KubernetesCustomResource>,

  /// Version of the registry entry to fetch.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

/// An in-cluster devfile custom resource.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesCustomResource {
  pub name: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub namespace: Option<String>,
}

/// Borrowed view of the populated reference choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSource<'a> {
  Uri(&'a str),
  Registry {
    id: &'a str,
    registry_url: Option<&'a str>,
  },
  Kubernetes {
    name: &'a str,
    namespace: Option<&'a str>,
  },
}

impl ImportReference {
  /// True when no reference choice is populated (nothing to resolve).
  pub fn is_empty(&self) -> bool {
    self.uri.is_none() && self.id.is_none() && self.kubernetes.is_none()
  }

  /// The populated reference choice, `uri` winning over `id` winning over
  /// `kubernetes` if a malformed document sets more than one.
  pub fn source(&self) -> Option<ImportSource<'_>> {
    if let Some(uri) = &self.uri {
      return Some(ImportSource::Uri(uri));
    }
    if let Some(id) = &self.id {
      return Some(ImportSource::Registry {
        id,
        registry_url: self.registry_url.as_deref(),
      });
    }
    self.kubernetes.as_ref().map(|k| ImportSource::Kubernetes {
      name: &k.name,
      namespace: k.namespace.as_deref(),
    })
  }
}

/// Human-readable descriptor used in provenance attributes and cycle
/// reports: `"uri: <uri>"`, `"id: <id>, registryURL: <url>"` or
/// `"name: <name>, namespace: <ns>"`.
impl fmt::Display for ImportReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.source() {
      Some(ImportSource::Uri(uri)) => write!(f, "uri: {uri}"),
      Some(ImportSource::Registry { id, registry_url }) => {
        write!(f, "id: {id}")?;
        if let Some(url) = registry_url {
          write!(f, ", registryURL: {url}")?;
        }
        Ok(())
      }
      Some(ImportSource::Kubernetes { name, namespace }) => {
        write!(f, "name: {name}")?;
        if let Some(ns) = namespace {
          write!(f, ", namespace: {ns}")?;
        }
        Ok(())
      }
      None => write!(f, "empty import reference"),
    }
  }
}
