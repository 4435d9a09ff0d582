//! Component collection operations.
//!
//! Component uniqueness is scoped per kind: a container and a volume may
//! share a name, two containers may not.

use crate::attributes::{Attributes, matches_filter};
use crate::schema::{Component, ComponentKind, Devfile};

use super::CollectionError;

/// Variant name used for the per-kind uniqueness scope. A component with
/// no populated kind gets its own scope.
fn kind_name(component: &Component) -> &'static str {
  component.kind.as_ref().map_or("unset", ComponentKind::kind_name)
}

impl Devfile {
  /// Components, optionally narrowed by an attribute filter.
  pub fn get_components(&self, filter: Option<&Attributes>) -> Vec<&Component> {
    self
      .components
      .iter()
      .filter(|component| filter.is_none_or(|f| matches_filter(&component.attributes, f)))
      .collect()
  }

  /// Append components, failing on the first name collision within the
  /// same component kind. Entries before the failing one stay appended.
  pub fn add_components(&mut self, components: Vec<Component>) -> Result<(), CollectionError> {
    for component in components {
      let collision = self
        .components
        .iter()
        .any(|existing| existing.name == component.name && kind_name(existing) == kind_name(&component));
      if collision {
        return Err(CollectionError::AlreadyExists {
          kind: "component",
          key: component.name,
        });
      }
      self.components.push(component);
    }
    Ok(())
  }

  /// Replace the first component with a matching name. Silently a no-op
  /// when no component matches.
  pub fn update_component(&mut self, component: Component) {
    if let Some(existing) = self
      .components
      .iter_mut()
      .find(|existing| existing.name == component.name)
    {
      *existing = component;
    }
  }

  /// Remove the first component with the given name and prune every
  /// container volume mount referencing it.
  pub fn delete_component(&mut self, name: &str) -> Result<(), CollectionError> {
    let Some(index) = self.components.iter().position(|component| component.name == name) else {
      return Err(CollectionError::NotFound {
        kind: "component",
        key: name.to_string(),
      });
    };
    self.components.remove(index);

    for component in &mut self.components {
      if let Some(ComponentKind::Container(container)) = &mut component.kind {
        container.volume_mounts.retain(|mount| mount.name != name);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::{ContainerComponent, VolumeComponent, VolumeMount};

  fn container(name: &str, mounts: &[&str]) -> Component {
    Component {
      name: name.to_string(),
      kind: Some(ComponentKind::Container(ContainerComponent {
        image: "img".to_string(),
        volume_mounts: mounts
          .iter()
          .map(|m| VolumeMount {
            name: m.to_string(),
            path: None,
          })
          .collect(),
        ..Default::default()
      })),
      ..Default::default()
    }
  }

  fn volume(name: &str) -> Component {
    Component {
      name: name.to_string(),
      kind: Some(ComponentKind::Volume(VolumeComponent::default())),
      ..Default::default()
    }
  }

  #[test]
  fn uniqueness_is_scoped_per_kind() {
    let mut devfile = Devfile::default();
    devfile
      .add_components(vec![container("data", &[]), volume("data")])
      .unwrap();

    let err = devfile.add_components(vec![container("data", &[])]).unwrap_err();
    assert!(matches!(err, CollectionError::AlreadyExists { kind: "component", .. }));
  }

  #[test]
  fn delete_cascades_to_volume_mounts() {
    let mut devfile = Devfile::default();
    devfile
      .add_components(vec![
        container("runtime", &["cache", "data"]),
        container("sidecar", &["cache"]),
        volume("cache"),
      ])
      .unwrap();

    devfile.delete_component("cache").unwrap();

    assert_eq!(devfile.components.len(), 2);
    let Some(ComponentKind::Container(runtime)) = &devfile.components[0].kind else {
      panic!("expected container");
    };
    assert_eq!(runtime.volume_mounts.len(), 1);
    assert_eq!(runtime.volume_mounts[0].name, "data");
    let Some(ComponentKind::Container(sidecar)) = &devfile.components[1].kind else {
      panic!("expected container");
    };
    assert!(sidecar.volume_mounts.is_empty());
  }

  #[test]
  fn delete_missing_component_leaves_document_unchanged() {
    let mut devfile = Devfile::default();
    devfile.add_components(vec![container("runtime", &["cache"])]).unwrap();
    let before = devfile.clone();

    let err = devfile.delete_component("nope").unwrap_err();
    assert!(matches!(err, CollectionError::NotFound { kind: "component", .. }));
    assert_eq!(devfile, before);
  }
}
