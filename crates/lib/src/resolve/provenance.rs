//! Provenance tagging.
//!
//! Every entity contributed through resolution gets the well-known
//! [`IMPORTED_FROM_ATTRIBUTE`] stamped into its attribute bag with a
//! human-readable descriptor of the import it came from. Entities that an
//! override patch touched get a prefixed descriptor naming the document
//! that declared the overrides, so an audit can tell a contributed-as-is
//! entity from an overridden one.

use serde_json::Value;

use crate::attributes::Attributes;
use crate::consts::{IMPORTED_FROM_ATTRIBUTE, MAIN_DEVFILE_SOURCE};
use crate::schema::{Devfile, ImportReference, ParentOverrides, PluginOverrides};

/// Descriptor for an import reference; the root (no reference) is the
/// main devfile.
pub fn import_source(reference: Option<&ImportReference>) -> String {
  match reference {
    Some(reference) => reference.to_string(),
    None => MAIN_DEVFILE_SOURCE.to_string(),
  }
}

fn stamp(attributes: &mut Attributes, source: &str) {
  attributes.insert(IMPORTED_FROM_ATTRIBUTE.to_string(), Value::String(source.to_string()));
}

fn stamp_if_untagged(attributes: &mut Attributes, source: &str) {
  attributes
    .entry(IMPORTED_FROM_ATTRIBUTE.to_string())
    .or_insert_with(|| Value::String(source.to_string()));
}

/// Stamp `source` on every command, component, project and starter
/// project in the document that is not tagged yet. Creates attribute bags
/// as needed. Entities a deeper ancestor already tagged keep their
/// original descriptor, so each entity names the import that actually
/// contributed it.
pub fn tag_devfile(devfile: &mut Devfile, source: &str) {
  for command in &mut devfile.commands {
    stamp_if_untagged(&mut command.attributes, source);
  }
  for component in &mut devfile.components {
    stamp_if_untagged(&mut component.attributes, source);
  }
  for project in &mut devfile.projects {
    stamp_if_untagged(&mut project.attributes, source);
  }
  for starter_project in &mut devfile.starter_projects {
    stamp_if_untagged(&mut starter_project.attributes, source);
  }
}

/// Re-stamp the entities named by a parent-override patch with the
/// override descriptor (e.g. `"parentOverrides from: main devfile"`).
pub fn tag_parent_overridden(devfile: &mut Devfile, overrides: &ParentOverrides, source: &str) {
  retag_commands_and_components(
    devfile,
    overrides.commands.iter().map(|c| c.id.as_str()),
    overrides.components.iter().map(|c| c.name.as_str()),
    source,
  );
  for patch in &overrides.projects {
    if let Some(project) = devfile.projects.iter_mut().find(|p| p.name == patch.name) {
      stamp(&mut project.attributes, source);
    }
  }
  for patch in &overrides.starter_projects {
    if let Some(project) = devfile.starter_projects.iter_mut().find(|p| p.name == patch.name) {
      stamp(&mut project.attributes, source);
    }
  }
}

/// Re-stamp the entities named by a plugin-override patch.
pub fn tag_plugin_overridden(devfile: &mut Devfile, overrides: &PluginOverrides, source: &str) {
  retag_commands_and_components(
    devfile,
    overrides.commands.iter().map(|c| c.id.as_str()),
    overrides.components.iter().map(|c| c.name.as_str()),
    source,
  );
}

fn retag_commands_and_components<'a>(
  devfile: &mut Devfile,
  command_ids: impl Iterator<Item = &'a str>,
  component_names: impl Iterator<Item = &'a str>,
  source: &str,
) {
  for id in command_ids {
    if let Some(command) = devfile.commands.iter_mut().find(|c| c.id == id) {
      stamp(&mut command.attributes, source);
    }
  }
  for name in component_names {
    if let Some(component) = devfile.components.iter_mut().find(|c| c.name == name) {
      stamp(&mut component.attributes, source);
    }
  }
}
