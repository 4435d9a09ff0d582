//! Devfile document types.
//!
//! A devfile is a declarative workspace description: named collections of
//! commands, components, projects and starter projects, a singleton events
//! record, and optional ancestor imports (a `parent` reference on the
//! document and `plugin` references on individual components).
//!
//! # Serialization
//!
//! Every type here (de)serializes to the devfile YAML format via serde.
//! Optional fields and empty collections are skipped on output so a parsed
//! document re-serializes without noise and round trips are loss-free.
//!
//! # Tagged unions
//!
//! Commands, components and project sources are tagged unions: the YAML
//! nests the kind-specific fields under a single group key (`exec:`,
//! `container:`, `git:`, ...). They are modeled as flattened enums, so
//! exactly one group key appears per entity.

mod command;
mod component;
mod events;
mod import;
mod metadata;
mod overrides;
mod project;

pub use command::{
  ApplyCommand, Command, CommandGroup, CommandKind, CompositeCommand, CustomCommand, EnvVar, ExecCommand, GroupKind,
  VscodeConfigurationCommand,
};
pub use component::{
  Component, ComponentKind, ContainerComponent, CustomComponent, DockerfileImage, Endpoint, ImageComponent,
  KubernetesLikeComponent, PluginComponent, VolumeComponent, VolumeMount,
};
pub use events::Events;
pub use import::{ImportReference, ImportSource, KubernetesCustomResource};
pub use metadata::Metadata;
pub use overrides::{
  ApplyOverride, CommandKindOverride, CommandOverride, ComponentKindOverride, ComponentOverride, CompositeOverride,
  ContainerOverride, CustomCommandOverride, CustomComponentOverride, EnvVarOverride, ExecOverride, ImageOverride,
  KubernetesLikeOverride, ParentOverrides, PluginComponentOverride, PluginOverrides, ProjectOverride,
  StarterProjectOverride, VolumeOverride, VscodeOverride,
};
pub use project::{CheckoutFrom, GitSource, Project, ProjectSource, StarterProject, ZipSource};

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// A complete devfile document.
///
/// Created by [`crate::yaml::parse`], mutated in place by ancestor
/// resolution ([`crate::resolve`]) and by the collection/override APIs
/// ([`crate::document`]), and serialized back by [`crate::yaml::to_yaml`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Devfile {
  /// Devfile schema version, e.g. `"2.2.0"`.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub schema_version: String,

  #[serde(default, skip_serializing_if = "Metadata::is_empty")]
  pub metadata: Metadata,

  /// Document-level attribute bag. Opaque to the core.
  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  /// Ancestor import plus the overrides to apply to its content.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parent: Option<Parent>,

  /// Commands, unique by id.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub commands: Vec<Command>,

  /// Components, unique by name within each component kind.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub components: Vec<Component>,

  /// Projects, unique by name.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub projects: Vec<Project>,

  /// Starter projects, unique by name.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub starter_projects: Vec<StarterProject>,

  /// Lifecycle event bindings.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub events: Option<Events>,
}

/// A parent import: where to fetch the ancestor devfile from, plus the
/// partial overrides to apply to its content before folding it in.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parent {
  #[serde(flatten)]
  pub import: ImportReference,

  #[serde(flatten)]
  pub overrides: ParentOverrides,
}

pub(crate) fn is_zero(value: &i32) -> bool {
  *value == 0
}
