//! Ancestor resolution orchestration.
//!
//! This module coordinates the full resolution flow for one document:
//! 1. Resolve the `parent` reference, depth-first: fetch, parse, resolve
//!    the ancestor's own parent, apply the local overrides, tag
//!    provenance, fold the result into the local document.
//! 2. Resolve the first plugin-bearing component the same way, folding
//!    commands and components only.
//!
//! Every step is synchronous and fail-fast: a cycle, fetch, parse, merge
//! or uniqueness error at any depth aborts the whole top-level call and no
//! partially composed document is returned.
//!
//! # Override semantics during resolution
//!
//! A `parent`/plugin override entry whose key matches an ancestor entity
//! merges into it; an entry matching nothing is appended as a new entity
//! (list merge-by-key, unlike the entity override API which treats a
//! missing target as an error).

mod context;
mod fetch;
mod provenance;

pub use context::{NodeId, ResolutionGraph};
pub use fetch::{FetchError, Fetcher, FileFetcher, HttpFetcher};
pub use provenance::{import_source, tag_devfile};

use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{PARENT_OVERRIDE_PREFIX, PLUGIN_OVERRIDE_PREFIX};
use crate::document::CollectionError;
use crate::merge::{
  MergeError, command_from_override, component_from_override, merged_command, merged_component, merged_events,
  merged_project, merged_starter_project, project_from_override, starter_project_from_override,
};
use crate::schema::{ComponentKind, Devfile, ParentOverrides, PluginComponent, PluginOverrides};
use crate::yaml::{self, ParseError};

/// Errors that can occur while resolving a document's imports.
#[derive(Debug, Error)]
pub enum ResolveError {
  /// The import chain repeats a reference.
  #[error("cyclic import detected: {chain}")]
  CyclicImport { chain: String },

  #[error("failed to fetch imported devfile: {0}")]
  Fetch(#[from] FetchError),

  #[error("failed to parse imported devfile: {0}")]
  Parse(#[from] ParseError),

  #[error("failed to apply overrides to imported devfile: {0}")]
  Merge(#[from] MergeError),

  /// The local document redefines something the ancestor contributes
  /// post-override. Always a configuration error, never resolved in
  /// either document's favor.
  #[error("conflict while merging imported devfile: {0}")]
  Collection(#[from] CollectionError),
}

/// Resolve a document's parent and plugin imports in place.
///
/// No-op success when the document declares neither. The resolution
/// context is allocated fresh per call and discarded on return.
pub fn resolve(devfile: &mut Devfile, fetcher: &dyn Fetcher) -> Result<(), ResolveError> {
  let mut graph = ResolutionGraph::new();
  let root = graph.root();
  resolve_parent(devfile, fetcher, &mut graph, root)?;
  resolve_first_plugin(devfile, fetcher, &mut graph, root)?;
  Ok(())
}

/// Resolve the `parent` declaration of `devfile`, folding the parent's
/// effective content into it.
fn resolve_parent(
  devfile: &mut Devfile,
  fetcher: &dyn Fetcher,
  graph: &mut ResolutionGraph,
  node: NodeId,
) -> Result<(), ResolveError> {
  let Some(parent) = devfile.parent.clone() else {
    return Ok(());
  };
  if parent.import.is_empty() {
    return Ok(());
  }

  let leaf = graph.append(node, parent.import.clone());
  if graph.has_cycle(leaf) {
    return Err(ResolveError::CyclicImport {
      chain: graph.chain(leaf),
    });
  }

  info!(reference = %parent.import, "resolving parent devfile");
  let bytes = fetcher.fetch(&parent.import)?;
  let mut ancestor = yaml::parse(&bytes)?;

  // Depth-first: the ancestor's own imports compose first, so overrides
  // apply from the most distant ancestor inward.
  resolve_parent(&mut ancestor, fetcher, graph, leaf)?;

  apply_parent_overrides(&mut ancestor, &parent.overrides)?;

  let ancestor_source = import_source(Some(&parent.import));
  tag_devfile(&mut ancestor, &ancestor_source);
  let importing_source = import_source(graph.reference(node));
  provenance::tag_parent_overridden(
    &mut ancestor,
    &parent.overrides,
    &format!("{PARENT_OVERRIDE_PREFIX} {importing_source}"),
  );

  debug!(
    commands = ancestor.commands.len(),
    components = ancestor.components.len(),
    projects = ancestor.projects.len(),
    "folding parent content"
  );
  devfile.add_commands(ancestor.commands)?;
  devfile.add_components(ancestor.components)?;
  devfile.add_projects(ancestor.projects)?;
  devfile.add_starter_projects(ancestor.starter_projects)?;
  if let Some(events) = ancestor.events {
    devfile.add_events(events)?;
  }
  Ok(())
}

/// Resolve the first component carrying a usable plugin reference.
///
/// Subsequent plugin components are ignored; multi-plugin documents are
/// not supported. A plugin contributes commands and components only,
/// never projects, starter projects or events.
fn resolve_first_plugin(
  devfile: &mut Devfile,
  fetcher: &dyn Fetcher,
  graph: &mut ResolutionGraph,
  node: NodeId,
) -> Result<(), ResolveError> {
  let plugin: Option<PluginComponent> = devfile.components.iter().find_map(|component| match &component.kind {
    Some(ComponentKind::Plugin(plugin)) if !plugin.import.is_empty() => Some(plugin.clone()),
    _ => None,
  });
  let Some(plugin) = plugin else {
    return Ok(());
  };

  let leaf = graph.append(node, plugin.import.clone());
  if graph.has_cycle(leaf) {
    return Err(ResolveError::CyclicImport {
      chain: graph.chain(leaf),
    });
  }

  info!(reference = %plugin.import, "resolving plugin devfile");
  let bytes = fetcher.fetch(&plugin.import)?;
  let mut ancestor = yaml::parse(&bytes)?;

  resolve_parent(&mut ancestor, fetcher, graph, leaf)?;

  apply_plugin_overrides(&mut ancestor, &plugin.overrides)?;

  let ancestor_source = import_source(Some(&plugin.import));
  tag_devfile(&mut ancestor, &ancestor_source);
  let importing_source = import_source(graph.reference(node));
  provenance::tag_plugin_overridden(
    &mut ancestor,
    &plugin.overrides,
    &format!("{PLUGIN_OVERRIDE_PREFIX} {importing_source}"),
  );

  debug!(
    commands = ancestor.commands.len(),
    components = ancestor.components.len(),
    "folding plugin content"
  );
  devfile.add_commands(ancestor.commands)?;
  devfile.add_components(ancestor.components)?;
  Ok(())
}

/// Apply a parent's override patches to the fetched ancestor content.
/// Matching entities merge; unmatched patch entries become new entities,
/// appended in patch order.
fn apply_parent_overrides(ancestor: &mut Devfile, overrides: &ParentOverrides) -> Result<(), MergeError> {
  for patch in &overrides.commands {
    match ancestor.commands.iter().position(|c| c.id == patch.id) {
      Some(index) => ancestor.commands[index] = merged_command(&ancestor.commands[index], patch)?,
      None => ancestor.commands.push(command_from_override(patch)),
    }
  }
  for patch in &overrides.components {
    match ancestor.components.iter().position(|c| c.name == patch.name) {
      Some(index) => ancestor.components[index] = merged_component(&ancestor.components[index], patch)?,
      None => ancestor.components.push(component_from_override(patch)),
    }
  }
  for patch in &overrides.projects {
    match ancestor.projects.iter().position(|p| p.name == patch.name) {
      Some(index) => ancestor.projects[index] = merged_project(&ancestor.projects[index], patch)?,
      None => ancestor.projects.push(project_from_override(patch)),
    }
  }
  for patch in &overrides.starter_projects {
    match ancestor.starter_projects.iter().position(|p| p.name == patch.name) {
      Some(index) => {
        ancestor.starter_projects[index] = merged_starter_project(&ancestor.starter_projects[index], patch)?
      }
      None => ancestor.starter_projects.push(starter_project_from_override(patch)),
    }
  }
  if let Some(events_patch) = &overrides.events {
    let original = ancestor.events.take().unwrap_or_default();
    ancestor.events = Some(merged_events(&original, events_patch));
  }
  Ok(())
}

/// Apply a plugin's override patches: commands and components only.
fn apply_plugin_overrides(ancestor: &mut Devfile, overrides: &PluginOverrides) -> Result<(), MergeError> {
  for patch in &overrides.commands {
    match ancestor.commands.iter().position(|c| c.id == patch.id) {
      Some(index) => ancestor.commands[index] = merged_command(&ancestor.commands[index], patch)?,
      None => ancestor.commands.push(command_from_override(patch)),
    }
  }
  for patch in &overrides.components {
    match ancestor.components.iter().position(|c| c.name == patch.name) {
      Some(index) => ancestor.components[index] = merged_component(&ancestor.components[index], patch)?,
      None => ancestor.components.push(component_from_override(patch)),
    }
  }
  Ok(())
}
