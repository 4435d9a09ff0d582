//! Entity override API: apply partial-override patches to entities
//! already present in a document, independent of ancestor resolution.
//!
//! Patch keys are matched against entity keys case-insensitively, but the
//! stored entity's key is never case-normalized. The asymmetry is
//! long-standing observable behavior existing consumers may depend on, so
//! it is preserved as-is.

use thiserror::Error;

use crate::merge::{
  MergeError, merged_command, merged_component, merged_events, merged_project, merged_starter_project,
};
use crate::schema::{CommandOverride, ComponentOverride, Devfile, Events, ProjectOverride, StarterProjectOverride};

/// Errors from the entity override API.
#[derive(Debug, Error)]
pub enum OverrideError {
  /// No entity in the collection matches the patch key.
  #[error("{kind} '{key}' is not found in the devfile to override")]
  NotFound { kind: &'static str, key: String },

  #[error(transparent)]
  Merge(#[from] MergeError),
}

impl Devfile {
  /// Apply command patches, matching each patch `id` case-insensitively.
  pub fn override_commands(&mut self, patches: &[CommandOverride]) -> Result<(), OverrideError> {
    for patch in patches {
      let Some(existing) = self.commands.iter().find(|c| c.id.eq_ignore_ascii_case(&patch.id)) else {
        return Err(OverrideError::NotFound {
          kind: "command",
          key: patch.id.clone(),
        });
      };
      let merged = merged_command(existing, patch)?;
      self.update_command(merged);
    }
    Ok(())
  }

  /// Apply component patches, matching each patch `name`
  /// case-insensitively.
  pub fn override_components(&mut self, patches: &[ComponentOverride]) -> Result<(), OverrideError> {
    for patch in patches {
      let Some(existing) = self
        .components
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(&patch.name))
      else {
        return Err(OverrideError::NotFound {
          kind: "component",
          key: patch.name.clone(),
        });
      };
      let merged = merged_component(existing, patch)?;
      self.update_component(merged);
    }
    Ok(())
  }

  /// Apply project patches, matching each patch `name` case-insensitively.
  pub fn override_projects(&mut self, patches: &[ProjectOverride]) -> Result<(), OverrideError> {
    for patch in patches {
      let Some(existing) = self.projects.iter().find(|p| p.name.eq_ignore_ascii_case(&patch.name)) else {
        return Err(OverrideError::NotFound {
          kind: "project",
          key: patch.name.clone(),
        });
      };
      let merged = merged_project(existing, patch)?;
      self.update_project(merged);
    }
    Ok(())
  }

  /// Apply starter-project patches, matching each patch `name`
  /// case-insensitively.
  pub fn override_starter_projects(&mut self, patches: &[StarterProjectOverride]) -> Result<(), OverrideError> {
    for patch in patches {
      let Some(existing) = self
        .starter_projects
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(&patch.name))
      else {
        return Err(OverrideError::NotFound {
          kind: "starter project",
          key: patch.name.clone(),
        });
      };
      let merged = merged_starter_project(existing, patch)?;
      self.update_starter_project(merged);
    }
    Ok(())
  }

  /// Merge an events patch into the document's events record. No key
  /// lookup: the record is a singleton, created when absent.
  pub fn override_events(&mut self, patch: &Events) {
    let original = self.events.take().unwrap_or_default();
    self.events = Some(merged_events(&original, patch));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::{Command, CommandKind, CommandKindOverride, ExecCommand, ExecOverride};

  fn devfile_with_command(id: &str) -> Devfile {
    Devfile {
      commands: vec![Command {
        id: id.to_string(),
        kind: Some(CommandKind::Exec(ExecCommand {
          command_line: "make".to_string(),
          ..Default::default()
        })),
        ..Default::default()
      }],
      ..Default::default()
    }
  }

  fn patch(id: &str, command_line: &str) -> CommandOverride {
    CommandOverride {
      id: id.to_string(),
      kind: Some(CommandKindOverride::Exec(ExecOverride {
        command_line: Some(command_line.to_string()),
        ..Default::default()
      })),
      ..Default::default()
    }
  }

  #[test]
  fn lookup_is_case_insensitive_but_storage_keeps_case() {
    let mut devfile = devfile_with_command("NodeJS");

    devfile.override_commands(&[patch("nodejs", "npm start")]).unwrap();

    // Stored key untouched, body merged.
    assert_eq!(devfile.commands[0].id, "NodeJS");
    let Some(CommandKind::Exec(exec)) = &devfile.commands[0].kind else {
      panic!("expected exec command");
    };
    assert_eq!(exec.command_line, "npm start");
  }

  #[test]
  fn exact_case_also_matches() {
    let mut devfile = devfile_with_command("NodeJS");
    devfile.override_commands(&[patch("NodeJS", "npm ci")]).unwrap();
    assert_eq!(devfile.commands[0].id, "NodeJS");
  }

  #[test]
  fn missing_target_fails() {
    let mut devfile = devfile_with_command("build");
    let err = devfile.override_commands(&[patch("deploy", "x")]).unwrap_err();
    assert!(matches!(err, OverrideError::NotFound { kind: "command", .. }));
  }

  #[test]
  fn events_override_merges_against_singleton() {
    let mut devfile = Devfile {
      events: Some(Events {
        post_start: vec!["build".to_string()],
        pre_stop: vec!["flush".to_string()],
        ..Default::default()
      }),
      ..Default::default()
    };

    devfile.override_events(&Events {
      post_start: vec!["bootstrap".to_string()],
      ..Default::default()
    });

    let events = devfile.get_events().unwrap();
    assert_eq!(events.post_start, vec!["bootstrap"]);
    assert_eq!(events.pre_stop, vec!["flush"]);
  }
}
