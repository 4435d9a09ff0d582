//! Events merge. Each phase list is keyless, so a populated patch phase
//! replaces the original phase and an empty one is a no-op. No type
//! mismatch is possible.

use crate::schema::Events;

use super::replace_list;

/// Merge an events override into a copy of `original`.
pub fn merged_events(original: &Events, patch: &Events) -> Events {
  let mut merged = original.clone();
  replace_list(&mut merged.pre_start, &patch.pre_start);
  replace_list(&mut merged.post_start, &patch.post_start);
  replace_list(&mut merged.pre_stop, &patch.pre_stop);
  replace_list(&mut merged.post_stop, &patch.post_stop);
  merged
}
