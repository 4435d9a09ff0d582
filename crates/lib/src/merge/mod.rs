//! Structured merge engine.
//!
//! Applies an override patch to an entity, producing a merged copy. One
//! typed merge function exists per concrete entity kind (exec command,
//! container component, ...) rather than a single reflective merge, so the
//! compiler checks every field pairing; the shared rules live in this
//! module:
//!
//! - **Scalars**: a non-empty / non-zero / `true` patch value replaces the
//!   original; an empty, zero, `false` or absent one is a no-op. There is no
//!   way to clear a scalar through an override.
//! - **Keyed lists** (env, volume mounts, endpoints): each patch entry
//!   merges into the original entry with the same key, or is appended in
//!   patch order when no key matches.
//! - **Keyless lists** (args, composite command ids, event phases): a
//!   non-empty patch list replaces the original wholesale.
//! - **Maps** (attributes, git remotes): patch entries upsert; other keys
//!   are preserved.
//! - A patch naming a different union variant than the original fails with
//!   [`MergeError::TypeMismatch`]; the original is never partially updated.
//!
//! All merge functions are pure over their inputs: they clone the original,
//! merge into the clone and only return it on success.

mod command;
mod component;
mod events;
mod project;

pub use command::merged_command;
pub use component::merged_component;
pub use events::merged_events;
pub use project::{merged_project, merged_starter_project};

pub(crate) use command::command_from_override;
pub(crate) use component::component_from_override;
pub(crate) use project::{project_from_override, starter_project_from_override};

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::attributes::Attributes;
use crate::schema::CommandGroup;

/// Errors produced by the merge engine.
#[derive(Debug, Error)]
pub enum MergeError {
  /// The patch names a different union variant than the original entity.
  /// Always fatal to the enclosing operation.
  #[error("cannot override {kind} '{key}': it is defined as {original} but the override is {patch}")]
  TypeMismatch {
    kind: &'static str,
    key: String,
    original: &'static str,
    patch: &'static str,
  },
}

/// Replace a required string when the patch value is non-empty.
pub(crate) fn override_string(target: &mut String, patch: Option<&str>) {
  if let Some(value) = patch {
    if !value.is_empty() {
      *target = value.to_string();
    }
  }
}

/// Replace an optional string when the patch value is non-empty.
pub(crate) fn override_opt_string(target: &mut Option<String>, patch: Option<&str>) {
  if let Some(value) = patch {
    if !value.is_empty() {
      *target = Some(value.to_string());
    }
  }
}

/// Set an optional bool when the patch value is `true`. `false` is the
/// zero value and leaves the original untouched.
pub(crate) fn override_bool(target: &mut Option<bool>, patch: Option<bool>) {
  if patch == Some(true) {
    *target = Some(true);
  }
}

/// Replace an integer when the patch value is non-zero.
pub(crate) fn override_i32(target: &mut i32, patch: i32) {
  if patch != 0 {
    *target = patch;
  }
}

/// Replace a free-form value when the patch carries a non-null one.
pub(crate) fn override_value(target: &mut Option<Value>, patch: Option<&Value>) {
  if let Some(value) = patch {
    if !value.is_null() {
      *target = Some(value.clone());
    }
  }
}

/// Wholesale-replace a keyless list when the patch list is non-empty.
pub(crate) fn replace_list(target: &mut Vec<String>, patch: &[String]) {
  if !patch.is_empty() {
    *target = patch.to_vec();
  }
}

/// Upsert patch attributes into the target bag.
pub(crate) fn merge_attributes(target: &mut Attributes, patch: &Attributes) {
  for (key, value) in patch {
    target.insert(key.clone(), value.clone());
  }
}

/// Upsert patch entries into a string map (e.g. git remotes).
pub(crate) fn merge_string_map(target: &mut BTreeMap<String, String>, patch: &BTreeMap<String, String>) {
  for (key, value) in patch {
    target.insert(key.clone(), value.clone());
  }
}

/// Merge a list-of-records field by its declared key.
///
/// Each patch entry either merges into the first original entry with the
/// same key or is appended after the existing entries, in patch order.
pub(crate) fn merge_keyed_list<T, P>(
  target: &mut Vec<T>,
  patch: &[P],
  target_key: impl Fn(&T) -> &str,
  patch_key: impl Fn(&P) -> &str,
  merge_entry: impl Fn(&mut T, &P),
  new_entry: impl Fn(&P) -> T,
) {
  for patch_entry in patch {
    let key = patch_key(patch_entry);
    match target.iter_mut().find(|entry| target_key(entry) == key) {
      Some(existing) => merge_entry(existing, patch_entry),
      None => target.push(new_entry(patch_entry)),
    }
  }
}

/// Merge a command group patch. The shape is its own patch type; a missing
/// original adopts the patch.
pub(crate) fn merge_group(target: &mut Option<CommandGroup>, patch: Option<&CommandGroup>) {
  let Some(patch) = patch else { return };
  match target {
    None => *target = Some(patch.clone()),
    Some(group) => {
      if let Some(kind) = patch.kind {
        group.kind = Some(kind);
      }
      override_bool(&mut group.is_default, patch.is_default);
    }
  }
}
