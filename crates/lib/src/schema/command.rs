//! Command types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::Attributes;

/// A named command, unique by `id` within a devfile.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
  pub id: String,

  #[serde(default, skip_serializing_if = "Attributes::is_empty")]
  pub attributes: Attributes,

  /// The populated command kind. Exactly one group key in YAML.
  #[serde(flatten)]
  pub kind: Option<CommandKind>,
}

/// The command tagged union. The populated variant is authoritative:
/// overriding a command with a patch of a different kind is a type
/// mismatch, never a silent replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandKind {
  Exec(ExecCommand),
  Apply(ApplyCommand),
  Composite(CompositeCommand),
  Custom(CustomCommand),
  VscodeTask(VscodeConfigurationCommand),
  VscodeLaunch(VscodeConfigurationCommand),
}

impl CommandKind {
  /// Name of the populated variant, for error messages.
  pub fn kind_name(&self) -> &'static str {
    match self {
      CommandKind::Exec(_) => "exec",
      CommandKind::Apply(_) => "apply",
      CommandKind::Composite(_) => "composite",
      CommandKind::Custom(_) => "custom",
      CommandKind::VscodeTask(_) => "vscodeTask",
      CommandKind::VscodeLaunch(_) => "vscodeLaunch",
    }
  }
}

/// A command line run inside a component's container.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecCommand {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub command_line: String,

  /// Name of the component the command runs in.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub component: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub working_dir: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group: Option<CommandGroup>,

  /// Environment variables, merged by `name` under overrides.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub env: Vec<EnvVar>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hot_reload_capable: Option<bool>,
}

/// Applies a component's manifest (e.g. a kubernetes component) when run.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCommand {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub component: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group: Option<CommandGroup>,
}

/// Runs other commands by id, sequentially or in parallel.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeCommand {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub commands: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parallel: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group: Option<CommandGroup>,
}

/// A command delegated to a tooling-specific controller.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCommand {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub command_class: String,

  /// Controller configuration, passed through untouched.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub embedded_configuration: Option<Value>,
}

/// A VS Code task or launch configuration, referenced or inlined.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VscodeConfigurationCommand {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uri: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inlined: Option<String>,
}

/// Groups a command under a lifecycle kind (build, run, ...) and marks
/// the group's default. All fields optional, so the same shape serves as
/// its own override patch.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandGroup {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<GroupKind>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
  Build,
  Run,
  Test,
  Debug,
  Deploy,
}

/// An environment variable entry. Lists of these merge by `name`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
  pub name: String,
  #[serde(default)]
  pub value: String,
}
