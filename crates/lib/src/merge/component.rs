//! Typed merges for component kinds.

use crate::schema::{
  Component, ComponentKind, ComponentKindOverride, ComponentOverride, ContainerComponent, ContainerOverride,
  CustomComponent, CustomComponentOverride, Endpoint, ImageComponent, ImageOverride, ImportReference,
  KubernetesLikeComponent, KubernetesLikeOverride, PluginComponent, PluginComponentOverride, VolumeComponent,
  VolumeMount, VolumeOverride,
};

use super::command::{env_from_override, merge_env};
use super::{
  MergeError, merge_attributes, merge_keyed_list, override_bool, override_i32, override_opt_string, override_string,
  override_value, replace_list,
};

/// Merge a component override into a copy of `original`.
///
/// The component's `name` is its identity and is never rewritten from the
/// patch. A patch naming a different component kind fails with
/// [`MergeError::TypeMismatch`] and leaves the original untouched.
pub fn merged_component(original: &Component, patch: &ComponentOverride) -> Result<Component, MergeError> {
  let mut merged = original.clone();
  merge_attributes(&mut merged.attributes, &patch.attributes);

  match (&mut merged.kind, &patch.kind) {
    (_, None) => {}
    (target @ None, Some(kind)) => *target = Some(kind_from_override(kind)),
    (Some(ComponentKind::Container(container)), Some(ComponentKindOverride::Container(p))) => {
      merge_container(container, p)
    }
    (Some(ComponentKind::Kubernetes(kubernetes)), Some(ComponentKindOverride::Kubernetes(p))) => {
      merge_kubernetes_like(kubernetes, p)
    }
    (Some(ComponentKind::Openshift(openshift)), Some(ComponentKindOverride::Openshift(p))) => {
      merge_kubernetes_like(openshift, p)
    }
    (Some(ComponentKind::Volume(volume)), Some(ComponentKindOverride::Volume(p))) => merge_volume(volume, p),
    (Some(ComponentKind::Image(image)), Some(ComponentKindOverride::Image(p))) => merge_image(image, p),
    (Some(ComponentKind::Plugin(plugin)), Some(ComponentKindOverride::Plugin(p))) => merge_plugin(plugin, p),
    (Some(ComponentKind::Custom(custom)), Some(ComponentKindOverride::Custom(p))) => merge_custom(custom, p),
    (Some(original_kind), Some(patch_kind)) => {
      return Err(MergeError::TypeMismatch {
        kind: "component",
        key: original.name.clone(),
        original: original_kind.kind_name(),
        patch: patch_kind.kind_name(),
      });
    }
  }

  Ok(merged)
}

/// Materialize a full component from an override patch that matched
/// nothing, e.g. a parent override entry introducing a new component.
pub(crate) fn component_from_override(patch: &ComponentOverride) -> Component {
  Component {
    name: patch.name.clone(),
    attributes: patch.attributes.clone(),
    kind: patch.kind.as_ref().map(kind_from_override),
  }
}

fn kind_from_override(patch: &ComponentKindOverride) -> ComponentKind {
  match patch {
    ComponentKindOverride::Container(p) => ComponentKind::Container(ContainerComponent {
      image: p.image.clone().unwrap_or_default(),
      command: p.command.clone(),
      args: p.args.clone(),
      env: p.env.iter().map(env_from_override).collect(),
      volume_mounts: p.volume_mounts.clone(),
      endpoints: p.endpoints.clone(),
      memory_limit: p.memory_limit.clone(),
      memory_request: p.memory_request.clone(),
      cpu_limit: p.cpu_limit.clone(),
      cpu_request: p.cpu_request.clone(),
      mount_sources: p.mount_sources,
      source_mapping: p.source_mapping.clone(),
      dedicated_pod: p.dedicated_pod,
    }),
    ComponentKindOverride::Kubernetes(p) => ComponentKind::Kubernetes(kubernetes_like_from_override(p)),
    ComponentKindOverride::Openshift(p) => ComponentKind::Openshift(kubernetes_like_from_override(p)),
    ComponentKindOverride::Volume(p) => ComponentKind::Volume(VolumeComponent {
      size: p.size.clone(),
      ephemeral: p.ephemeral,
    }),
    ComponentKindOverride::Image(p) => ComponentKind::Image(ImageComponent {
      image_name: p.image_name.clone().unwrap_or_default(),
      dockerfile: p.dockerfile.clone(),
      auto_build: p.auto_build,
    }),
    ComponentKindOverride::Plugin(p) => ComponentKind::Plugin(PluginComponent {
      import: p.import.clone(),
      overrides: Default::default(),
    }),
    ComponentKindOverride::Custom(p) => ComponentKind::Custom(CustomComponent {
      component_class: p.component_class.clone().unwrap_or_default(),
      embedded_resource: p.embedded_resource.clone(),
    }),
  }
}

fn kubernetes_like_from_override(patch: &KubernetesLikeOverride) -> KubernetesLikeComponent {
  KubernetesLikeComponent {
    uri: patch.uri.clone(),
    inlined: patch.inlined.clone(),
    endpoints: patch.endpoints.clone(),
    deploy_by_default: patch.deploy_by_default,
  }
}

fn merge_container(target: &mut ContainerComponent, patch: &ContainerOverride) {
  override_string(&mut target.image, patch.image.as_deref());
  replace_list(&mut target.command, &patch.command);
  replace_list(&mut target.args, &patch.args);
  merge_env(&mut target.env, &patch.env);
  merge_volume_mounts(&mut target.volume_mounts, &patch.volume_mounts);
  merge_endpoints(&mut target.endpoints, &patch.endpoints);
  override_opt_string(&mut target.memory_limit, patch.memory_limit.as_deref());
  override_opt_string(&mut target.memory_request, patch.memory_request.as_deref());
  override_opt_string(&mut target.cpu_limit, patch.cpu_limit.as_deref());
  override_opt_string(&mut target.cpu_request, patch.cpu_request.as_deref());
  override_bool(&mut target.mount_sources, patch.mount_sources);
  override_opt_string(&mut target.source_mapping, patch.source_mapping.as_deref());
  override_bool(&mut target.dedicated_pod, patch.dedicated_pod);
}

fn merge_kubernetes_like(target: &mut KubernetesLikeComponent, patch: &KubernetesLikeOverride) {
  override_opt_string(&mut target.uri, patch.uri.as_deref());
  override_opt_string(&mut target.inlined, patch.inlined.as_deref());
  merge_endpoints(&mut target.endpoints, &patch.endpoints);
  override_bool(&mut target.deploy_by_default, patch.deploy_by_default);
}

fn merge_volume(target: &mut VolumeComponent, patch: &VolumeOverride) {
  override_opt_string(&mut target.size, patch.size.as_deref());
  override_bool(&mut target.ephemeral, patch.ephemeral);
}

fn merge_image(target: &mut ImageComponent, patch: &ImageOverride) {
  override_string(&mut target.image_name, patch.image_name.as_deref());
  if let Some(dockerfile_patch) = &patch.dockerfile {
    match &mut target.dockerfile {
      None => target.dockerfile = Some(dockerfile_patch.clone()),
      Some(dockerfile) => {
        override_opt_string(&mut dockerfile.uri, dockerfile_patch.uri.as_deref());
        override_opt_string(&mut dockerfile.build_context, dockerfile_patch.build_context.as_deref());
        replace_list(&mut dockerfile.args, &dockerfile_patch.args);
        override_bool(&mut dockerfile.root_required, dockerfile_patch.root_required);
      }
    }
  }
  override_bool(&mut target.auto_build, patch.auto_build);
}

fn merge_plugin(target: &mut PluginComponent, patch: &PluginComponentOverride) {
  merge_import(&mut target.import, &patch.import);
}

fn merge_custom(target: &mut CustomComponent, patch: &CustomComponentOverride) {
  override_string(&mut target.component_class, patch.component_class.as_deref());
  override_value(&mut target.embedded_resource, patch.embedded_resource.as_ref());
}

/// Merge an import reference field by field. The reference shape is its
/// own patch type since every field is optional.
pub(crate) fn merge_import(target: &mut ImportReference, patch: &ImportReference) {
  override_opt_string(&mut target.uri, patch.uri.as_deref());
  override_opt_string(&mut target.id, patch.id.as_deref());
  override_opt_string(&mut target.registry_url, patch.registry_url.as_deref());
  override_opt_string(&mut target.version, patch.version.as_deref());
  if let Some(kubernetes_patch) = &patch.kubernetes {
    match &mut target.kubernetes {
      None => target.kubernetes = Some(kubernetes_patch.clone()),
      Some(kubernetes) => {
        override_string(&mut kubernetes.name, Some(&kubernetes_patch.name));
        override_opt_string(&mut kubernetes.namespace, kubernetes_patch.namespace.as_deref());
      }
    }
  }
}

/// Merge a volume-mount list by mount name.
fn merge_volume_mounts(target: &mut Vec<VolumeMount>, patch: &[VolumeMount]) {
  merge_keyed_list(
    target,
    patch,
    |mount| mount.name.as_str(),
    |p| p.name.as_str(),
    |mount, p| override_opt_string(&mut mount.path, p.path.as_deref()),
    VolumeMount::clone,
  );
}

/// Merge an endpoint list by endpoint name.
fn merge_endpoints(target: &mut Vec<Endpoint>, patch: &[Endpoint]) {
  merge_keyed_list(
    target,
    patch,
    |endpoint| endpoint.name.as_str(),
    |p| p.name.as_str(),
    |endpoint, p| {
      override_i32(&mut endpoint.target_port, p.target_port);
      override_opt_string(&mut endpoint.exposure, p.exposure.as_deref());
      override_opt_string(&mut endpoint.protocol, p.protocol.as_deref());
      override_bool(&mut endpoint.secure, p.secure);
      override_opt_string(&mut endpoint.path, p.path.as_deref());
      merge_attributes(&mut endpoint.attributes, &p.attributes);
    },
    Endpoint::clone,
  );
}
