//! Command collection operations.

use crate::attributes::{Attributes, matches_filter};
use crate::schema::{Command, Devfile};

use super::CollectionError;

impl Devfile {
  /// Commands, optionally narrowed by an attribute filter (logical AND
  /// across filter keys; a command missing a key is excluded).
  pub fn get_commands(&self, filter: Option<&Attributes>) -> Vec<&Command> {
    self
      .commands
      .iter()
      .filter(|command| filter.is_none_or(|f| matches_filter(&command.attributes, f)))
      .collect()
  }

  /// Append commands, failing on the first duplicate id. Entries before
  /// the failing one stay appended.
  pub fn add_commands(&mut self, commands: Vec<Command>) -> Result<(), CollectionError> {
    for command in commands {
      if self.commands.iter().any(|existing| existing.id == command.id) {
        return Err(CollectionError::AlreadyExists {
          kind: "command",
          key: command.id,
        });
      }
      self.commands.push(command);
    }
    Ok(())
  }

  /// Replace the first command with a matching id. Silently a no-op when
  /// no command matches.
  pub fn update_command(&mut self, command: Command) {
    if let Some(existing) = self.commands.iter_mut().find(|existing| existing.id == command.id) {
      *existing = command;
    }
  }

  /// Remove the command with the given id.
  pub fn delete_command(&mut self, id: &str) -> Result<(), CollectionError> {
    let Some(index) = self.commands.iter().position(|command| command.id == id) else {
      return Err(CollectionError::NotFound {
        kind: "command",
        key: id.to_string(),
      });
    };
    self.commands.remove(index);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::attributes::string_attribute;
  use crate::schema::{CommandKind, ExecCommand};

  fn command(id: &str) -> Command {
    Command {
      id: id.to_string(),
      kind: Some(CommandKind::Exec(ExecCommand::default())),
      ..Default::default()
    }
  }

  #[test]
  fn add_rejects_duplicate_id() {
    let mut devfile = Devfile::default();
    devfile.add_commands(vec![command("build"), command("run")]).unwrap();

    let err = devfile.add_commands(vec![command("build")]).unwrap_err();
    assert!(matches!(err, CollectionError::AlreadyExists { kind: "command", .. }));
  }

  #[test]
  fn batch_add_is_not_rolled_back() {
    let mut devfile = Devfile::default();
    devfile.add_commands(vec![command("build")]).unwrap();

    let result = devfile.add_commands(vec![command("test"), command("build"), command("run")]);
    assert!(result.is_err());

    // "test" landed before the batch failed; "run" never did.
    let ids: Vec<_> = devfile.commands.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["build", "test"]);
  }

  #[test]
  fn filter_narrows_results() {
    let mut devfile = Devfile::default();
    let mut tagged = command("build");
    tagged.attributes = string_attribute("tool", "maven");
    devfile.add_commands(vec![tagged, command("run")]).unwrap();

    let filter = string_attribute("tool", "maven");
    let found = devfile.get_commands(Some(&filter));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "build");

    assert_eq!(devfile.get_commands(None).len(), 2);
  }

  #[test]
  fn update_is_silent_on_missing_target() {
    let mut devfile = Devfile::default();
    devfile.add_commands(vec![command("build")]).unwrap();

    devfile.update_command(command("missing"));
    assert_eq!(devfile.commands.len(), 1);
    assert_eq!(devfile.commands[0].id, "build");
  }

  #[test]
  fn delete_missing_command_fails() {
    let mut devfile = Devfile::default();
    let err = devfile.delete_command("nope").unwrap_err();
    assert!(matches!(err, CollectionError::NotFound { kind: "command", .. }));
  }

  #[test]
  fn delete_removes_command() {
    let mut devfile = Devfile::default();
    devfile.add_commands(vec![command("build"), command("run")]).unwrap();
    devfile.delete_command("build").unwrap();
    assert_eq!(devfile.commands.len(), 1);
    assert_eq!(devfile.commands[0].id, "run");
  }
}
