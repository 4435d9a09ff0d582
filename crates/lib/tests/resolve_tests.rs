//! End-to-end resolution scenarios against an in-memory fetcher.

use std::collections::HashMap;

use devfile_lib::consts::IMPORTED_FROM_ATTRIBUTE;
use devfile_lib::document::CollectionError;
use devfile_lib::resolve::{FetchError, Fetcher, ResolveError, resolve};
use devfile_lib::schema::{CommandKind, ComponentKind, ImportReference};
use devfile_lib::yaml;

/// Serves canned devfiles keyed by reference descriptor.
struct MapFetcher {
  documents: HashMap<String, String>,
}

impl MapFetcher {
  fn new(entries: &[(&str, &str)]) -> Self {
    MapFetcher {
      documents: entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
    }
  }
}

impl Fetcher for MapFetcher {
  fn fetch(&self, reference: &ImportReference) -> Result<Vec<u8>, FetchError> {
    self
      .documents
      .get(&reference.to_string())
      .map(|doc| doc.clone().into_bytes())
      .ok_or_else(|| FetchError::Unsupported {
        reference: reference.to_string(),
      })
  }
}

fn imported_from(attributes: &devfile_lib::attributes::Attributes) -> Option<&str> {
  attributes.get(IMPORTED_FROM_ATTRIBUTE).and_then(|v| v.as_str())
}

#[test]
fn document_without_imports_resolves_as_noop() {
  let mut devfile = yaml::parse(b"schemaVersion: 2.2.0\ncommands:\n  - id: run\n    exec:\n      commandLine: cargo run\n").unwrap();
  let before = devfile.clone();

  resolve(&mut devfile, &MapFetcher::new(&[])).unwrap();
  assert_eq!(devfile, before);
}

#[test]
fn parent_content_is_folded_and_tagged() {
  let fetcher = MapFetcher::new(&[(
    "uri: parent.yaml",
    r#"
schemaVersion: 2.2.0
commands:
  - id: build
    exec:
      component: runtime
      commandLine: npm install
components:
  - name: runtime
    container:
      image: registry.example.com/nodejs:18
"#,
  )]);

  let mut devfile = yaml::parse(
    br#"
schemaVersion: 2.2.0
parent:
  uri: parent.yaml
commands:
  - id: run
    exec:
      component: runtime
      commandLine: npm start
"#,
  )
  .unwrap();

  resolve(&mut devfile, &fetcher).unwrap();

  assert_eq!(devfile.commands.len(), 2);
  let build = devfile.commands.iter().find(|c| c.id == "build").unwrap();
  assert_eq!(imported_from(&build.attributes), Some("uri: parent.yaml"));

  // Local entities are never tagged.
  let run = devfile.commands.iter().find(|c| c.id == "run").unwrap();
  assert_eq!(imported_from(&run.attributes), None);

  let runtime = devfile.components.iter().find(|c| c.name == "runtime").unwrap();
  assert_eq!(imported_from(&runtime.attributes), Some("uri: parent.yaml"));
}

#[test]
fn fold_conflict_with_local_command_fails() {
  let fetcher = MapFetcher::new(&[(
    "uri: parent.yaml",
    "schemaVersion: 2.2.0\ncommands:\n  - id: build\n    exec:\n      commandLine: make\n",
  )]);

  let mut devfile = yaml::parse(
    b"schemaVersion: 2.2.0\nparent:\n  uri: parent.yaml\ncommands:\n  - id: build\n    exec:\n      commandLine: ninja\n",
  )
  .unwrap();

  let err = resolve(&mut devfile, &fetcher).unwrap_err();
  assert!(matches!(
    err,
    ResolveError::Collection(CollectionError::AlreadyExists { kind: "command", ref key }) if key == "build"
  ));
}

#[test]
fn two_document_cycle_is_detected() {
  let fetcher = MapFetcher::new(&[
    (
      "uri: a.yaml",
      "schemaVersion: 2.2.0\nparent:\n  uri: b.yaml\n",
    ),
    (
      "uri: b.yaml",
      "schemaVersion: 2.2.0\nparent:\n  uri: a.yaml\n",
    ),
  ]);

  let mut devfile = yaml::parse(b"schemaVersion: 2.2.0\nparent:\n  uri: a.yaml\n").unwrap();

  let err = resolve(&mut devfile, &fetcher).unwrap_err();
  let ResolveError::CyclicImport { chain } = err else {
    panic!("expected cyclic import, got {err:?}");
  };
  assert_eq!(chain, "main devfile -> uri: a.yaml -> uri: b.yaml -> uri: a.yaml");
}

#[test]
fn three_level_chain_resolves_and_keeps_deep_provenance() {
  let fetcher = MapFetcher::new(&[
    (
      "uri: parent.yaml",
      r#"
schemaVersion: 2.2.0
parent:
  uri: grandparent.yaml
commands:
  - id: build
    exec:
      commandLine: make
"#,
    ),
    (
      "uri: grandparent.yaml",
      "schemaVersion: 2.2.0\ncommands:\n  - id: lint\n    exec:\n      commandLine: make lint\n",
    ),
  ]);

  let mut devfile = yaml::parse(b"schemaVersion: 2.2.0\nparent:\n  uri: parent.yaml\n").unwrap();

  resolve(&mut devfile, &fetcher).unwrap();

  let build = devfile.commands.iter().find(|c| c.id == "build").unwrap();
  assert_eq!(imported_from(&build.attributes), Some("uri: parent.yaml"));

  // The grandparent's command keeps the descriptor of the import that
  // actually contributed it.
  let lint = devfile.commands.iter().find(|c| c.id == "lint").unwrap();
  assert_eq!(imported_from(&lint.attributes), Some("uri: grandparent.yaml"));
}

#[test]
fn parent_overrides_merge_and_retag() {
  let fetcher = MapFetcher::new(&[(
    "uri: parent.yaml",
    r#"
schemaVersion: 2.2.0
components:
  - name: runtime
    container:
      image: registry.example.com/nodejs:18
      memoryLimit: 512Mi
"#,
  )]);

  let mut devfile = yaml::parse(
    br#"
schemaVersion: 2.2.0
parent:
  uri: parent.yaml
  components:
    - name: runtime
      container:
        image: registry.example.com/nodejs:20
"#,
  )
  .unwrap();

  resolve(&mut devfile, &fetcher).unwrap();

  let runtime = devfile.components.iter().find(|c| c.name == "runtime").unwrap();
  let Some(ComponentKind::Container(container)) = &runtime.kind else {
    panic!("expected container");
  };
  assert_eq!(container.image, "registry.example.com/nodejs:20");
  assert_eq!(container.memory_limit.as_deref(), Some("512Mi"));
  assert_eq!(
    imported_from(&runtime.attributes),
    Some("parentOverrides from: main devfile")
  );
}

#[test]
fn parent_override_without_match_appends_new_entity() {
  let fetcher = MapFetcher::new(&[(
    "uri: parent.yaml",
    "schemaVersion: 2.2.0\ncommands:\n  - id: build\n    exec:\n      commandLine: make\n",
  )]);

  let mut devfile = yaml::parse(
    br#"
schemaVersion: 2.2.0
parent:
  uri: parent.yaml
  commands:
    - id: deploy
      exec:
        commandLine: make deploy
"#,
  )
  .unwrap();

  resolve(&mut devfile, &fetcher).unwrap();

  let deploy = devfile.commands.iter().find(|c| c.id == "deploy").unwrap();
  assert!(matches!(deploy.kind, Some(CommandKind::Exec(_))));
  assert_eq!(
    imported_from(&deploy.attributes),
    Some("parentOverrides from: main devfile")
  );
}

#[test]
fn parent_override_kind_mismatch_aborts_resolution() {
  let fetcher = MapFetcher::new(&[(
    "uri: parent.yaml",
    "schemaVersion: 2.2.0\ncommands:\n  - id: build\n    exec:\n      commandLine: make\n",
  )]);

  let mut devfile = yaml::parse(
    br#"
schemaVersion: 2.2.0
parent:
  uri: parent.yaml
  commands:
    - id: build
      composite:
        commands: [a, b]
"#,
  )
  .unwrap();

  let err = resolve(&mut devfile, &fetcher).unwrap_err();
  assert!(matches!(err, ResolveError::Merge(_)));
}

#[test]
fn events_fold_adopts_empty_phases_and_rejects_conflicts() {
  let fetcher = MapFetcher::new(&[(
    "uri: parent.yaml",
    "schemaVersion: 2.2.0\nevents:\n  postStart:\n    - warmup\n",
  )]);

  // Locally empty postStart adopts the ancestor's.
  let mut devfile = yaml::parse(b"schemaVersion: 2.2.0\nparent:\n  uri: parent.yaml\n").unwrap();
  resolve(&mut devfile, &fetcher).unwrap();
  assert_eq!(devfile.get_events().unwrap().post_start, vec!["warmup"]);

  // Locally populated postStart conflicts.
  let mut conflicted = yaml::parse(
    b"schemaVersion: 2.2.0\nparent:\n  uri: parent.yaml\nevents:\n  postStart:\n    - own-hook\n",
  )
  .unwrap();
  let err = resolve(&mut conflicted, &fetcher).unwrap_err();
  assert!(matches!(
    err,
    ResolveError::Collection(CollectionError::AlreadyExists { kind: "events", .. })
  ));
}

#[test]
fn plugin_folds_commands_and_components_only() {
  let fetcher = MapFetcher::new(&[(
    "id: theia, registryURL: https://registry.example.com",
    r#"
schemaVersion: 2.2.0
commands:
  - id: open-editor
    exec:
      commandLine: theia start
components:
  - name: editor-backend
    container:
      image: theia:latest
projects:
  - name: should-not-fold
events:
  postStart:
    - should-not-fold
"#,
  )]);

  let mut devfile = yaml::parse(
    br#"
schemaVersion: 2.2.0
components:
  - name: editor
    plugin:
      id: theia
      registryUrl: https://registry.example.com
"#,
  )
  .unwrap();

  resolve(&mut devfile, &fetcher).unwrap();

  let open_editor = devfile.commands.iter().find(|c| c.id == "open-editor").unwrap();
  assert_eq!(
    imported_from(&open_editor.attributes),
    Some("id: theia, registryURL: https://registry.example.com")
  );
  assert!(devfile.components.iter().any(|c| c.name == "editor-backend"));

  // Plugins never contribute projects or events.
  assert!(devfile.projects.is_empty());
  assert!(devfile.get_events().is_none());
}

#[test]
fn only_first_plugin_component_is_resolved() {
  let fetcher = MapFetcher::new(&[(
    "uri: first-plugin.yaml",
    "schemaVersion: 2.2.0\ncommands:\n  - id: first\n    exec:\n      commandLine: run\n",
  )]);

  // The second plugin's document is not even registered with the fetcher;
  // resolution must succeed without touching it.
  let mut devfile = yaml::parse(
    br#"
schemaVersion: 2.2.0
components:
  - name: one
    plugin:
      uri: first-plugin.yaml
  - name: two
    plugin:
      uri: second-plugin.yaml
"#,
  )
  .unwrap();

  resolve(&mut devfile, &fetcher).unwrap();

  assert!(devfile.commands.iter().any(|c| c.id == "first"));
}

#[test]
fn plugin_overrides_apply_before_folding() {
  let fetcher = MapFetcher::new(&[(
    "uri: plugin.yaml",
    r#"
schemaVersion: 2.2.0
components:
  - name: editor-backend
    container:
      image: theia:1.0
"#,
  )]);

  let mut devfile = yaml::parse(
    br#"
schemaVersion: 2.2.0
components:
  - name: editor
    plugin:
      uri: plugin.yaml
      components:
        - name: editor-backend
          container:
            image: theia:2.0
"#,
  )
  .unwrap();

  resolve(&mut devfile, &fetcher).unwrap();

  let backend = devfile.components.iter().find(|c| c.name == "editor-backend").unwrap();
  let Some(ComponentKind::Container(container)) = &backend.kind else {
    panic!("expected container");
  };
  assert_eq!(container.image, "theia:2.0");
  assert_eq!(
    imported_from(&backend.attributes),
    Some("pluginOverrides from: main devfile")
  );
}

#[test]
fn fetch_failure_propagates() {
  let mut devfile = yaml::parse(b"schemaVersion: 2.2.0\nparent:\n  uri: missing.yaml\n").unwrap();
  let err = resolve(&mut devfile, &MapFetcher::new(&[])).unwrap_err();
  assert!(matches!(err, ResolveError::Fetch(_)));
}

#[test]
fn unparsable_ancestor_propagates() {
  let fetcher = MapFetcher::new(&[("uri: parent.yaml", "commands: {not: [valid")]);
  let mut devfile = yaml::parse(b"schemaVersion: 2.2.0\nparent:\n  uri: parent.yaml\n").unwrap();
  let err = resolve(&mut devfile, &fetcher).unwrap_err();
  assert!(matches!(err, ResolveError::Parse(_)));
}
