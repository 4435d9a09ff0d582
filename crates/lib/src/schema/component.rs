//! Component types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::Attributes;
use crate::schema::command::EnvVar;
use crate::schema::import::ImportReference;
use crate::schema::overrides::PluginOverrides;

/// A named component. Uniqueness is scoped per component kind: a container
/// and a volume may share a name, two containers may not.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
  pub name: String,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  #[serde(flatten)]
  pub kind: Option<ComponentKind>,
}

/// The component tagged union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
  Container(ContainerComponent),
  Kubernetes(KubernetesLikeComponent),
  Openshift(KubernetesLikeComponent),
  Volume(VolumeComponent),
  Image(ImageComponent),
  Plugin(PluginComponent),
  Custom(CustomComponent),
}

impl ComponentKind {
  /// Name of the populated variant, for error messages and per-kind
  /// uniqueness checks.
  pub fn kind_name(&self) -> &'static str {
    match self {
      ComponentKind::Container(_) => "container",
      ComponentKind::Kubernetes(_) => "kubernetes",
      ComponentKind::Openshift(_) => "openshift",
      ComponentKind::Volume(_) => "volume",
      ComponentKind::Image(_) => "image",
      ComponentKind::Plugin(_) => "plugin",
      ComponentKind::Custom(_) => "custom",
    }
  }
}

/// A container workload.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerComponent {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub image: String,

  /// Entrypoint override. Keyless list: overrides replace it wholesale.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub command: Vec<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub args: Vec<String>,

  /// Environment, merged by `name` under overrides.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub env: Vec<EnvVar>,

  /// Volume mounts, merged by `name` under overrides. Deleting the volume
  /// component they reference prunes them.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub volume_mounts: Vec<VolumeMount>,

  /// Exposed endpoints, merged by `name` under overrides.
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

/// A mount of a named volume component into a container.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeMount {
  /// Name of the volume component being mounted.
  pub name: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,
}

/// A named port exposed by a container or cluster component.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
  pub name: String,

  #[serde(default, skip_serializing_if = "crate::schema::is_zero")]
  pub target_port: i32,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exposure: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub protocol: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub secure: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,
}

/// A kubernetes or openshift manifest, referenced by uri or inlined.
/// Shared by both variants since the shapes are identical.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesLikeComponent {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uri: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inlined: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub endpoints: Vec<Endpoint>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deploy_by_default: Option<bool>,
}

/// A shared storage volume.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeComponent {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub size: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ephemeral: Option<bool>,
}

/// An image build.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageComponent {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub image_name: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dockerfile: Option<DockerfileImage>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub auto_build: Option<bool>,
}

/// Dockerfile build source and options. All fields optional, so the same
/// shape serves as its own override patch.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerfileImage {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uri: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub build_context: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub args: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub root_required: Option<bool>,
}

/// A plugin import carried by a component: where to fetch the plugin
/// devfile from, plus overrides for its commands and components.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginComponent {
  #[serde(flatten)]
  pub import: ImportReference,

  #[serde(flatten)]
  pub overrides: PluginOverrides,
}

/// A component delegated to a tooling-specific controller.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomComponent {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub component_class: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub embedded_resource: Option<Value>,
}
