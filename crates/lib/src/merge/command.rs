//! Typed merges for command kinds.

use crate::schema::{
  ApplyCommand, ApplyOverride, Command, CommandKind, CommandKindOverride, CommandOverride, CompositeCommand,
  CompositeOverride, CustomCommand, CustomCommandOverride, EnvVar, EnvVarOverride, ExecCommand, ExecOverride,
  VscodeConfigurationCommand, VscodeOverride,
};

use super::{
  MergeError, merge_attributes, merge_group, merge_keyed_list, override_bool, override_opt_string, override_string,
  override_value, replace_list,
};

/// Merge a command override into a copy of `original`.
///
/// The command's `id` is its identity and is never rewritten from the
/// patch. A patch naming a different command kind fails with
/// [`MergeError::TypeMismatch`] and leaves the original untouched.
pub fn merged_command(original: &Command, patch: &CommandOverride) -> Result<Command, MergeError> {
  let mut merged = original.clone();
  merge_attributes(&mut merged.attributes, &patch.attributes);

  match (&mut merged.kind, &patch.kind) {
    (_, None) => {}
    (target @ None, Some(kind)) => *target = Some(kind_from_override(kind)),
    (Some(CommandKind::Exec(exec)), Some(CommandKindOverride::Exec(p))) => merge_exec(exec, p),
    (Some(CommandKind::Apply(apply)), Some(CommandKindOverride::Apply(p))) => merge_apply(apply, p),
    (Some(CommandKind::Composite(composite)), Some(CommandKindOverride::Composite(p))) => {
      merge_composite(composite, p)
    }
    (Some(CommandKind::Custom(custom)), Some(CommandKindOverride::Custom(p))) => merge_custom(custom, p),
    (Some(CommandKind::VscodeTask(vscode)), Some(CommandKindOverride::VscodeTask(p))) => merge_vscode(vscode, p),
    (Some(CommandKind::VscodeLaunch(vscode)), Some(CommandKindOverride::VscodeLaunch(p))) => merge_vscode(vscode, p),
    (Some(original_kind), Some(patch_kind)) => {
      return Err(MergeError::TypeMismatch {
        kind: "command",
        key: original.id.clone(),
        original: original_kind.kind_name(),
        patch: patch_kind.kind_name(),
      });
    }
  }

  Ok(merged)
}

/// Materialize a full command from an override patch that matched nothing,
/// e.g. a parent override entry introducing a new command.
pub(crate) fn command_from_override(patch: &CommandOverride) -> Command {
  Command {
    id: patch.id.clone(),
    attributes: patch.attributes.clone(),
    kind: patch.kind.as_ref().map(kind_from_override),
  }
}

fn kind_from_override(patch: &CommandKindOverride) -> CommandKind {
  match patch {
    CommandKindOverride::Exec(p) => CommandKind::Exec(ExecCommand {
      command_line: p.command_line.clone().unwrap_or_default(),
      component: p.component.clone().unwrap_or_default(),
      working_dir: p.working_dir.clone(),
      label: p.label.clone(),
      group: p.group.clone(),
      env: p.env.iter().map(env_from_override).collect(),
      hot_reload_capable: p.hot_reload_capable,
    }),
    CommandKindOverride::Apply(p) => CommandKind::Apply(ApplyCommand {
      component: p.component.clone().unwrap_or_default(),
      label: p.label.clone(),
      group: p.group.clone(),
    }),
    CommandKindOverride::Composite(p) => CommandKind::Composite(CompositeCommand {
      commands: p.commands.clone(),
      parallel: p.parallel,
      label: p.label.clone(),
      group: p.group.clone(),
    }),
    CommandKindOverride::Custom(p) => CommandKind::Custom(CustomCommand {
      command_class: p.command_class.clone().unwrap_or_default(),
      embedded_configuration: p.embedded_configuration.clone(),
    }),
    CommandKindOverride::VscodeTask(p) => CommandKind::VscodeTask(vscode_from_override(p)),
    CommandKindOverride::VscodeLaunch(p) => CommandKind::VscodeLaunch(vscode_from_override(p)),
  }
}

fn vscode_from_override(patch: &VscodeOverride) -> VscodeConfigurationCommand {
  VscodeConfigurationCommand {
    uri: patch.uri.clone(),
    inlined: patch.inlined.clone(),
  }
}

fn merge_exec(target: &mut ExecCommand, patch: &ExecOverride) {
  override_string(&mut target.command_line, patch.command_line.as_deref());
  override_string(&mut target.component, patch.component.as_deref());
  override_opt_string(&mut target.working_dir, patch.working_dir.as_deref());
  override_opt_string(&mut target.label, patch.label.as_deref());
  merge_group(&mut target.group, patch.group.as_ref());
  merge_env(&mut target.env, &patch.env);
  override_bool(&mut target.hot_reload_capable, patch.hot_reload_capable);
}

fn merge_apply(target: &mut ApplyCommand, patch: &ApplyOverride) {
  override_string(&mut target.component, patch.component.as_deref());
  override_opt_string(&mut target.label, patch.label.as_deref());
  merge_group(&mut target.group, patch.group.as_ref());
}

fn merge_composite(target: &mut CompositeCommand, patch: &CompositeOverride) {
  replace_list(&mut target.commands, &patch.commands);
  override_bool(&mut target.parallel, patch.parallel);
  override_opt_string(&mut target.label, patch.label.as_deref());
  merge_group(&mut target.group, patch.group.as_ref());
}

fn merge_custom(target: &mut CustomCommand, patch: &CustomCommandOverride) {
  override_string(&mut target.command_class, patch.command_class.as_deref());
  override_value(&mut target.embedded_configuration, patch.embedded_configuration.as_ref());
}

fn merge_vscode(target: &mut VscodeConfigurationCommand, patch: &VscodeOverride) {
  override_opt_string(&mut target.uri, patch.uri.as_deref());
  override_opt_string(&mut target.inlined, patch.inlined.as_deref());
}

/// Merge an env list by variable name.
pub(crate) fn merge_env(target: &mut Vec<EnvVar>, patch: &[EnvVarOverride]) {
  merge_keyed_list(
    target,
    patch,
    |env| env.name.as_str(),
    |p| p.name.as_str(),
    |env, p| override_string(&mut env.value, p.value.as_deref()),
    env_from_override,
  );
}

pub(crate) fn env_from_override(patch: &EnvVarOverride) -> EnvVar {
  EnvVar {
    name: patch.name.clone(),
    value: patch.value.clone().unwrap_or_default(),
  }
}
