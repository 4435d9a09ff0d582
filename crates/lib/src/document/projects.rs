//! Project and starter-project collection operations.

use crate::attributes::{Attributes, matches_filter};
use crate::schema::{Devfile, Project, StarterProject};

use super::CollectionError;

impl Devfile {
  /// Projects, optionally narrowed by an attribute filter.
  pub fn get_projects(&self, filter: Option<&Attributes>) -> Vec<&Project> {
    self
      .projects
      .iter()
      .filter(|project| filter.is_none_or(|f| matches_filter(&project.attributes, f)))
      .collect()
  }

  /// Append projects, failing on the first duplicate name. Entries before
  /// the failing one stay appended.
  pub fn add_projects(&mut self, projects: Vec<Project>) -> Result<(), CollectionError> {
    for project in projects {
      if self.projects.iter().any(|existing| existing.name == project.name) {
        return Err(CollectionError::AlreadyExists {
          kind: "project",
          key: project.name,
        });
      }
      self.projects.push(project);
    }
    Ok(())
  }

  /// Replace the first project with a matching name; silent no-op when
  /// absent.
  pub fn update_project(&mut self, project: Project) {
    if let Some(existing) = self.projects.iter_mut().find(|existing| existing.name == project.name) {
      *existing = project;
    }
  }

  /// Remove the project with the given name.
  pub fn delete_project(&mut self, name: &str) -> Result<(), CollectionError> {
    let Some(index) = self.projects.iter().position(|project| project.name == name) else {
      return Err(CollectionError::NotFound {
        kind: "project",
        key: name.to_string(),
      });
    };
    self.projects.remove(index);
    Ok(())
  }

  /// Starter projects, optionally narrowed by an attribute filter.
  pub fn get_starter_projects(&self, filter: Option<&Attributes>) -> Vec<&StarterProject> {
    self
      .starter_projects
      .iter()
      .filter(|project| filter.is_none_or(|f| matches_filter(&project.attributes, f)))
      .collect()
  }

  /// Append starter projects, failing on the first duplicate name.
  /// Entries before the failing one stay appended.
  pub fn add_starter_projects(&mut self, projects: Vec<StarterProject>) -> Result<(), CollectionError> {
    for project in projects {
      if self.starter_projects.iter().any(|existing| existing.name == project.name) {
        return Err(CollectionError::AlreadyExists {
          kind: "starter project",
          key: project.name,
        });
      }
      self.starter_projects.push(project);
    }
    Ok(())
  }

  /// Replace the first starter project with a matching name; silent no-op
  /// when absent.
  pub fn update_starter_project(&mut self, project: StarterProject) {
    if let Some(existing) = self
      .starter_projects
      .iter_mut()
      .find(|existing| existing.name == project.name)
    {
      *existing = project;
    }
  }

  /// Remove the starter project with the given name.
  pub fn delete_starter_project(&mut self, name: &str) -> Result<(), CollectionError> {
    let Some(index) = self.starter_projects.iter().position(|project| project.name == name) else {
      return Err(CollectionError::NotFound {
        kind: "starter project",
        key: name.to_string(),
      });
    };
    self.starter_projects.remove(index);
    Ok(())
  }
}
