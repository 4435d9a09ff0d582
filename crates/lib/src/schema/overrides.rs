//! Override-patch types.
//!
//! These mirror the full entity types with every field optional (or
//! default-empty), so an absent field means "no change". Where a full type
//! is already all-optional (command groups, volume mounts, project sources,
//! events, dockerfile options) it serves as its own patch shape and is not
//! mirrored here.
//!
//! Patches appear in two places: inside a devfile's `parent` / plugin
//! declarations (applied to the fetched ancestor's content during
//! resolution) and as arguments to the entity override API (applied to
//! entities already present in a document).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::Attributes;
use crate::schema::command::CommandGroup;
use crate::schema::component::{DockerfileImage, Endpoint, VolumeMount};
use crate::schema::events::Events;
use crate::schema::import::ImportReference;
use crate::schema::project::ProjectSource;

/// Overrides a parent declaration may carry. A parent contributes all
/// collections, so all of them can be overridden.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentOverrides {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub commands: Vec<CommandOverride>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub components: Vec<ComponentOverride>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub projects: Vec<ProjectOverride>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub starter_projects: Vec<StarterProjectOverride>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub events: Option<Events>,
}

/// Overrides a plugin declaration may carry: commands and components only,
/// since plugins never contribute projects or events.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOverrides {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub commands: Vec<CommandOverride>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub components: Vec<ComponentOverride>,
}

/// A partial command, matched to its target by `id`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOverride {
  pub id: String,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  #[serde(flatten)]
  pub kind: Option<CommandKindOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandKindOverride {
  Exec(ExecOverride),
  Apply(ApplyOverride),
  Composite(CompositeOverride),
  Custom(CustomCommandOverride),
  VscodeTask(VscodeOverride),
  VscodeLaunch(VscodeOverride),
}

impl CommandKindOverride {
  pub fn kind_name(&self) -> &'static str {
    match self {
      CommandKindOverride::Exec(_) => "exec",
      CommandKindOverride::Apply(_) => "apply",
      CommandKindOverride::Composite(_) => "composite",
      CommandKindOverride::Custom(_) => "custom",
      CommandKindOverride::VscodeTask(_) => "vscodeTask",
      CommandKindOverride::VscodeLaunch(_) => "vscodeLaunch",
    }
  }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub command_line: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub component: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub working_dir: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group: Option<CommandGroup>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub env: Vec<EnvVarOverride>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hot_reload_capable: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub component: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group: Option<CommandGroup>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeOverride {
  /// Keyless list: a non-empty value replaces the target's list.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub commands: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parallel: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group: Option<CommandGroup>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCommandOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub command_class: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub embedded_configuration: Option<Value>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VscodeOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uri: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inlined: Option<String>,
}

/// An environment entry patch, merged into the target's env list by `name`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarOverride {
  pub name: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
}

/// A partial component, matched to its target by `name`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverride {
  pub name: String,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  #[serde(flatten)]
  pub kind: Option<ComponentKindOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKindOverride {
  Container(ContainerOverride),
  Kubernetes(KubernetesLikeOverride),
  Openshift(KubernetesLikeOverride),
  Volume(VolumeOverride),
  Image(ImageOverride),
  Plugin(PluginComponentOverride),
  Custom(CustomComponentOverride),
}

impl ComponentKindOverride {
  pub fn kind_name(&self) -> &'static str {
    match self {
      ComponentKindOverride::Container(_) => "container",
      ComponentKindOverride::Kubernetes(_) => "kubernetes",
      ComponentKindOverride::Openshift(_) => "openshift",
      ComponentKindOverride::Volume(_) => "volume",
      ComponentKindOverride::Image(_) => "image",
      ComponentKindOverride::Plugin(_) => "plugin",
      ComponentKindOverride::Custom(_) => "custom",
    }
  }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub command: Vec<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub args: Vec<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub env: Vec<EnvVarOverride>,

  /// Merged into the target's mounts by `name`.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub volume_mounts: Vec<VolumeMount>,

  /// Merged into the target's endpoints by `name`; a zero `targetPort`
  /// leaves the target's port untouched.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub endpoints: Vec<Endpoint>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub memory_limit: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub memory_request: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cpu_limit: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cpu_request: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mount_sources: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_mapping: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dedicated_pod: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesLikeOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uri: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inlined: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub endpoints: Vec<Endpoint>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deploy_by_default: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub size: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ephemeral: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dockerfile: Option<DockerfileImage>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub auto_build: Option<bool>,
}

/// Overrides a nested plugin component's import reference. Patching the
/// plugin's own overrides from a grandparent is not supported.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginComponentOverride {
  #[serde(flatten)]
  pub import: ImportReference,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomComponentOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub component_class: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub embedded_resource: Option<Value>,
}

/// A partial project, matched to its target by `name`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverride {
  pub name: String,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub clone_path: Option<String>,

  #[serde(flatten)]
  pub source: Option<ProjectSource>,
}

/// A partial starter project, matched to its target by `name`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterProjectOverride {
  pub name: String,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sub_dir: Option<String>,

  #[serde(flatten)]
  pub source: Option<ProjectSource>,
}
