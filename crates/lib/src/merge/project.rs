//! Typed merges for projects and starter projects.

use crate::schema::{
  GitSource, Project, ProjectOverride, ProjectSource, StarterProject, StarterProjectOverride, ZipSource,
};

use super::{MergeError, merge_attributes, merge_string_map, override_opt_string};

/// Merge a project override into a copy of `original`.
pub fn merged_project(original: &Project, patch: &ProjectOverride) -> Result<Project, MergeError> {
  let mut merged = original.clone();
  merge_attributes(&mut merged.attributes, &patch.attributes);
  override_opt_string(&mut merged.clone_path, patch.clone_path.as_deref());
  merge_source(&mut merged.source, patch.source.as_ref(), "project", &original.name)?;
  Ok(merged)
}

/// Merge a starter-project override into a copy of `original`.
pub fn merged_starter_project(
  original: &StarterProject,
  patch: &StarterProjectOverride,
) -> Result<StarterProject, MergeError> {
  let mut merged = original.clone();
  merge_attributes(&mut merged.attributes, &patch.attributes);
  override_opt_string(&mut merged.description, patch.description.as_deref());
  override_opt_string(&mut merged.sub_dir, patch.sub_dir.as_deref());
  merge_source(&mut merged.source, patch.source.as_ref(), "starter project", &original.name)?;
  Ok(merged)
}

pub(crate) fn project_from_override(patch: &ProjectOverride) -> Project {
  Project {
    name: patch.name.clone(),
    attributes: patch.attributes.clone(),
    clone_path: patch.clone_path.clone(),
    source: patch.source.clone(),
  }
}

pub(crate) fn starter_project_from_override(patch: &StarterProjectOverride) -> StarterProject {
  StarterProject {
    name: patch.name.clone(),
    attributes: patch.attributes.clone(),
    description: patch.description.clone(),
    sub_dir: patch.sub_dir.clone(),
    source: patch.source.clone(),
  }
}

/// Merge a project-source union. The source shape is its own patch type;
/// mismatched variants are a type mismatch like any other union.
fn merge_source(
  target: &mut Option<ProjectSource>,
  patch: Option<&ProjectSource>,
  kind: &'static str,
  key: &str,
) -> Result<(), MergeError> {
  let Some(patch) = patch else { return Ok(()) };
  match target {
    None => *target = Some(patch.clone()),
    Some(ProjectSource::Git(git)) => match patch {
      ProjectSource::Git(p) => merge_git(git, p),
      other => {
        return Err(MergeError::TypeMismatch {
          kind,
          key: key.to_string(),
          original: "git",
          patch: other.kind_name(),
        });
      }
    },
    Some(ProjectSource::Zip(zip)) => match patch {
      ProjectSource::Zip(p) => merge_zip(zip, p),
      other => {
        return Err(MergeError::TypeMismatch {
          kind,
          key: key.to_string(),
          original: "zip",
          patch: other.kind_name(),
        });
      }
    },
  }
  Ok(())
}

fn merge_git(target: &mut GitSource, patch: &GitSource) {
  merge_string_map(&mut target.remotes, &patch.remotes);
  if let Some(checkout_patch) = &patch.checkout_from {
    match &mut target.checkout_from {
      None => target.checkout_from = Some(checkout_patch.clone()),
      Some(checkout) => {
        override_opt_string(&mut checkout.revision, checkout_patch.revision.as_deref());
        override_opt_string(&mut checkout.remote, checkout_patch.remote.as_deref());
      }
    }
  }
}

fn merge_zip(target: &mut ZipSource, patch: &ZipSource) {
  override_opt_string(&mut target.location, patch.location.as_deref());
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::CheckoutFrom;
  use std::collections::BTreeMap;

  fn git_project(name: &str) -> Project {
    Project {
      name: name.to_string(),
      source: Some(ProjectSource::Git(GitSource {
        remotes: BTreeMap::from([("origin".to_string(), "https://github.com/org/app.git".to_string())]),
        checkout_from: Some(CheckoutFrom {
          revision: Some("main".to_string()),
          remote: None,
        }),
      })),
      ..Default::default()
    }
  }

  #[test]
  fn empty_patch_is_identity() {
    let original = git_project("app");
    let patch = ProjectOverride {
      name: "app".to_string(),
      ..Default::default()
    };

    assert_eq!(merged_project(&original, &patch).unwrap(), original);
  }

  #[test]
  fn remotes_upsert_by_name() {
    let original = git_project("app");
    let patch = ProjectOverride {
      name: "app".to_string(),
      source: Some(ProjectSource::Git(GitSource {
        remotes: BTreeMap::from([("fork".to_string(), "https://github.com/me/app.git".to_string())]),
        checkout_from: None,
      })),
      ..Default::default()
    };

    let merged = merged_project(&original, &patch).unwrap();
    let Some(ProjectSource::Git(git)) = merged.source else {
      panic!("expected git source");
    };
    assert_eq!(git.remotes.len(), 2);
    assert!(git.remotes.contains_key("origin"));
    assert_eq!(git.checkout_from.unwrap().revision.as_deref(), Some("main"));
  }

  #[test]
  fn source_kind_mismatch_is_rejected() {
    let original = git_project("app");
    let patch = ProjectOverride {
      name: "app".to_string(),
      source: Some(ProjectSource::Zip(ZipSource {
        location: Some("https://example.com/app.zip".to_string()),
      })),
      ..Default::default()
    };

    let err = merged_project(&original, &patch).unwrap_err();
    let MergeError::TypeMismatch { original: o, patch: p, .. } = err;
    assert_eq!(o, "git");
    assert_eq!(p, "zip");
  }

  #[test]
  fn starter_project_sub_dir_override() {
    let original = StarterProject {
      name: "sample".to_string(),
      sub_dir: Some("frontend".to_string()),
      ..Default::default()
    };
    let patch = StarterProjectOverride {
      name: "sample".to_string(),
      sub_dir: Some("backend".to_string()),
      ..Default::default()
    };

    let merged = merged_starter_project(&original, &patch).unwrap();
    assert_eq!(merged.sub_dir.as_deref(), Some("backend"));
  }
}
