//! Lifecycle event bindings.

use serde::{Deserialize, Serialize};

/// The singleton events record: command ids bound to the four workspace
/// lifecycle phases.
///
/// Every field defaults to empty, so the same shape serves as its own
/// override patch (a populated phase replaces, an empty one is a no-op).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Events {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub pre_start: Vec<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub post_start: Vec<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub pre_stop: Vec<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub post_stop: Vec<String>,
}

impl Events {
  pub fn is_empty(&self) -> bool {
    self.pre_start.is_empty() && self.post_start.is_empty() && self.pre_stop.is_empty() && self.post_stop.is_empty()
  }
}
